//! formsync-lifecycle: CRUD lifecycle orchestration for ticket form
//! reconciliation.
//!
//! Composes the descriptor codec from `formsync-core` with a remote API
//! capability:
//! - `TicketFormApi`: The consumed remote capability, keyed by numeric id
//! - `TicketFormLifecycle`: create/read/update/delete orchestration, with
//!   the remote response committed back to the store after every write

pub mod api;
pub mod error;
pub mod lifecycle;

pub use api::{ApiError, TicketFormApi};
pub use error::{Result, SyncError};
pub use lifecycle::TicketFormLifecycle;
