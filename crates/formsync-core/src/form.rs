//! Ticket form domain entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

fn default_true() -> bool {
    true
}

/// A ticket form: a named, ordered grouping of ticket fields presented to
/// end users, as exposed by the remote API.
///
/// Field names follow the remote wire shape. `ticket_field_ids` is an
/// ordered sequence (the display order of fields within the form);
/// `restricted_brand_ids` is a set, equality is set equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketForm {
    /// Remote identifier; present iff the form is persisted remotely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Remote-computed URL of the form; never supplied by the caller.
    #[serde(default)]
    pub url: String,

    /// Rendered form name.
    #[serde(default)]
    pub name: String,

    /// Raw (unprocessed) form name.
    #[serde(default)]
    pub raw_name: String,

    /// Rendered name shown to end users.
    #[serde(default)]
    pub display_name: String,

    /// Raw (unprocessed) end-user name.
    #[serde(default)]
    pub raw_display_name: String,

    /// Ordering hint among sibling forms.
    #[serde(default)]
    pub position: i64,

    /// Whether the form is active.
    #[serde(default = "default_true")]
    pub active: bool,

    /// Whether the form is visible to end users.
    #[serde(default)]
    pub end_user_visible: bool,

    /// Whether this is the account's default form.
    #[serde(default)]
    pub default: bool,

    /// Ids of the ticket fields on this form, in display order.
    #[serde(default)]
    pub ticket_field_ids: Vec<i64>,

    /// Whether the form is available in all brands on the account.
    #[serde(default = "default_true")]
    pub in_all_brands: bool,

    /// Ids of the brands this form is restricted to; order insignificant.
    #[serde(default)]
    pub restricted_brand_ids: BTreeSet<i64>,
}

impl TicketForm {
    /// Create a form with the given name, populating both the rendered
    /// and raw name with the same value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: name.clone(),
            raw_name: name,
            ..Self::default()
        }
    }

    /// Set the end-user display name (rendered and raw).
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        self.display_name = display_name.clone();
        self.raw_display_name = display_name;
        self
    }

    /// Set the ordering position.
    #[must_use]
    pub const fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Set the ordered ticket field ids.
    #[must_use]
    pub fn with_ticket_field_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ticket_field_ids = ids.into_iter().collect();
        self
    }

    /// Set the restricted brand ids.
    #[must_use]
    pub fn with_restricted_brand_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.restricted_brand_ids = ids.into_iter().collect();
        self
    }

    /// Whether the form exists remotely (has a remote-assigned identifier).
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Default for TicketForm {
    fn default() -> Self {
        Self {
            id: None,
            url: String::new(),
            name: String::new(),
            raw_name: String::new(),
            display_name: String::new(),
            raw_display_name: String::new(),
            position: 0,
            active: true,
            end_user_visible: false,
            default: false,
            ticket_field_ids: Vec::new(),
            in_all_brands: true,
            restricted_brand_ids: BTreeSet::new(),
        }
    }
}
