//! Config-store capability: the declared-configuration snapshot the
//! decoder reads from and the encoder writes to.

use crate::error::{CoreError, Result};
use crate::schema::{self, FieldKind};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// The declared-configuration snapshot for one ticket form resource.
///
/// Getters return `None` when the field has no explicit declared value;
/// the decoder substitutes schema defaults or zero values. Setters may be
/// rejected at the storage boundary, reported as `CoreError::Encode`.
///
/// Each field is read through its own statically typed accessor, so a
/// value decoded for one field can never be assigned to another.
pub trait ConfigStore {
    /// The resource's textual identifier; empty when not yet created.
    fn id(&self) -> &str;

    /// Set the resource's textual identifier.
    fn set_id(&mut self, id: &str);

    fn get_string(&self, field: &str) -> Option<String>;
    fn get_i64(&self, field: &str) -> Option<i64>;
    fn get_bool(&self, field: &str) -> Option<bool>;
    fn get_i64_list(&self, field: &str) -> Option<Vec<i64>>;
    fn get_i64_set(&self, field: &str) -> Option<BTreeSet<i64>>;

    fn set_string(&mut self, field: &str, value: &str) -> Result<()>;
    fn set_i64(&mut self, field: &str, value: i64) -> Result<()>;
    fn set_bool(&mut self, field: &str, value: bool) -> Result<()>;
    fn set_i64_list(&mut self, field: &str, value: &[i64]) -> Result<()>;
    fn set_i64_set(&mut self, field: &str, value: &BTreeSet<i64>) -> Result<()>;
}

/// In-memory [`ConfigStore`] validating every write against the ticket
/// form field schema. Used in tests and by embedding engines that keep
/// declared state as JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    id: String,
    values: HashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store with no identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store bound to an existing identifier, as the engine does
    /// when importing an out-of-band resource.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: HashMap::new(),
        }
    }

    fn check_kind(field: &str, kind: FieldKind) -> Result<()> {
        let spec = schema::field_spec(field).ok_or_else(|| CoreError::Encode {
            field: field.to_string(),
            reason: "not a ticket form field".to_string(),
        })?;
        if spec.kind == kind {
            Ok(())
        } else {
            Err(CoreError::Encode {
                field: field.to_string(),
                reason: format!("kind mismatch: schema says {:?}, write was {kind:?}", spec.kind),
            })
        }
    }

    fn get_checked(&self, field: &str, kind: FieldKind) -> Option<&Value> {
        Self::check_kind(field, kind).ok()?;
        self.values.get(field)
    }

    fn set_checked(&mut self, field: &str, kind: FieldKind, value: Value) -> Result<()> {
        Self::check_kind(field, kind)?;
        self.values.insert(field.to_string(), value);
        Ok(())
    }
}

impl ConfigStore for MemoryStore {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn get_string(&self, field: &str) -> Option<String> {
        self.get_checked(field, FieldKind::String)?
            .as_str()
            .map(String::from)
    }

    fn get_i64(&self, field: &str) -> Option<i64> {
        self.get_checked(field, FieldKind::Integer)?.as_i64()
    }

    fn get_bool(&self, field: &str) -> Option<bool> {
        self.get_checked(field, FieldKind::Bool)?.as_bool()
    }

    fn get_i64_list(&self, field: &str) -> Option<Vec<i64>> {
        self.get_checked(field, FieldKind::IntList)?
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_i64).collect())
    }

    fn get_i64_set(&self, field: &str) -> Option<BTreeSet<i64>> {
        self.get_checked(field, FieldKind::IntSet)?
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_i64).collect())
    }

    fn set_string(&mut self, field: &str, value: &str) -> Result<()> {
        self.set_checked(field, FieldKind::String, Value::from(value))
    }

    fn set_i64(&mut self, field: &str, value: i64) -> Result<()> {
        self.set_checked(field, FieldKind::Integer, Value::from(value))
    }

    fn set_bool(&mut self, field: &str, value: bool) -> Result<()> {
        self.set_checked(field, FieldKind::Bool, Value::from(value))
    }

    fn set_i64_list(&mut self, field: &str, value: &[i64]) -> Result<()> {
        self.set_checked(field, FieldKind::IntList, Value::from(value.to_vec()))
    }

    fn set_i64_set(&mut self, field: &str, value: &BTreeSet<i64>) -> Result<()> {
        let items: Vec<i64> = value.iter().copied().collect();
        self.set_checked(field, FieldKind::IntSet, Value::from(items))
    }
}
