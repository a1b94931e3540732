//! formsync-core: Domain model and descriptor codec for ticket form
//! reconciliation.
//!
//! This crate provides:
//! - `TicketForm`: The ticket form entity in the remote API's wire shape
//! - `ConfigStore`: The declared-configuration snapshot capability, with a
//!   schema-validating in-memory implementation
//! - `decode`/`encode`: The bidirectional translation between the two
//! - The identifier codec bridging textual and numeric identifiers

pub mod codec;
pub mod error;
pub mod form;
pub mod ident;
pub mod schema;
pub mod store;

pub use codec::{decode, encode};
pub use error::{CoreError, Result};
pub use form::TicketForm;
pub use ident::{format_id, parse_id};
pub use schema::{FieldKind, FieldSpec, TICKET_FORM_FIELDS};
pub use store::{ConfigStore, MemoryStore};
