//! Static field schema for the ticket form resource.
//!
//! The set of recognized declared fields, their kinds, and their defaults
//! is one immutable value consulted by the decoder, the encoder, and the
//! in-memory store. There is no dynamic schema registration.

/// Kind of a declared field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 text.
    String,
    /// 64-bit integer.
    Integer,
    /// Boolean.
    Bool,
    /// Ordered sequence of integers; order is significant.
    IntList,
    /// Unordered collection of integers; duplicates collapse.
    IntSet,
}

/// Declaration of a single declared field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Declared field name (also the wire name).
    pub name: &'static str,
    /// Value kind.
    pub kind: FieldKind,
    /// Remote-computed: never supplied by the caller, only written back.
    pub computed: bool,
    /// Default for unset boolean fields.
    pub default_bool: Option<bool>,
}

impl FieldSpec {
    const fn declared(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            computed: false,
            default_bool: None,
        }
    }

    const fn computed(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            computed: true,
            default_bool: None,
        }
    }

    const fn bool_with_default(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: FieldKind::Bool,
            computed: false,
            default_bool: Some(default),
        }
    }
}

/// URL of the form (computed).
pub const URL: &str = "url";
/// Name of the form.
pub const NAME: &str = "name";
/// Name of the form shown to end users.
pub const DISPLAY_NAME: &str = "display_name";
/// Position of the form among other forms in the account.
pub const POSITION: &str = "position";
/// Whether the form is active.
pub const ACTIVE: &str = "active";
/// Whether the form is visible to end users.
pub const END_USER_VISIBLE: &str = "end_user_visible";
/// Whether the form is the account default.
pub const DEFAULT: &str = "default";
/// Ids of the ticket fields on the form, in display order.
pub const TICKET_FIELD_IDS: &str = "ticket_field_ids";
/// Whether the form is available in all brands.
pub const IN_ALL_BRANDS: &str = "in_all_brands";
/// Ids of the brands the form is restricted to (computed).
pub const RESTRICTED_BRAND_IDS: &str = "restricted_brand_ids";

/// The full ticket form field schema.
pub const TICKET_FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::computed(URL, FieldKind::String),
    FieldSpec::declared(NAME, FieldKind::String),
    FieldSpec::declared(DISPLAY_NAME, FieldKind::String),
    FieldSpec::declared(POSITION, FieldKind::Integer),
    FieldSpec::bool_with_default(ACTIVE, true),
    FieldSpec::declared(END_USER_VISIBLE, FieldKind::Bool),
    FieldSpec::declared(DEFAULT, FieldKind::Bool),
    FieldSpec::declared(TICKET_FIELD_IDS, FieldKind::IntList),
    FieldSpec::bool_with_default(IN_ALL_BRANDS, true),
    FieldSpec::computed(RESTRICTED_BRAND_IDS, FieldKind::IntSet),
];

/// Look up the schema entry for a declared field name.
#[must_use]
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    TICKET_FORM_FIELDS.iter().find(|f| f.name == name)
}

/// Default for an unset boolean field, `false` unless the schema says
/// otherwise.
#[must_use]
pub fn bool_default(name: &str) -> bool {
    field_spec(name).and_then(|f| f.default_bool).unwrap_or(false)
}
