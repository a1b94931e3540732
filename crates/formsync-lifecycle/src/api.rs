//! Remote API capability for ticket forms.
//!
//! The transport (HTTP, authentication, retries, rate limiting) lives in
//! the implementation; this crate only sees the trait. Every call takes
//! the caller's cancellation token, which is propagated opaquely — the
//! orchestrator never polls it.

use formsync_core::TicketForm;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors a remote API implementation can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No ticket form with this identifier exists remotely.
    #[error("ticket form {0} not found")]
    NotFound(i64),

    /// The caller's cancellation token fired mid-call.
    #[error("request cancelled")]
    Cancelled,

    /// The remote rejected the payload (validation failure).
    #[error("remote rejected payload: {0}")]
    Rejected(String),

    /// Network or protocol failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Ticket form operations exposed by the remote platform, keyed by the
/// numeric identifier. The remote response is authoritative after every
/// write.
pub trait TicketFormApi {
    /// Create a form; the returned entity carries the remote-assigned
    /// identifier and URL.
    fn create_ticket_form(
        &self,
        cancel: &CancellationToken,
        form: &TicketForm,
    ) -> Result<TicketForm, ApiError>;

    /// Fetch the current remote state of a form.
    fn get_ticket_form(&self, cancel: &CancellationToken, id: i64) -> Result<TicketForm, ApiError>;

    /// Full-resource replace of a form.
    fn update_ticket_form(
        &self,
        cancel: &CancellationToken,
        id: i64,
        form: &TicketForm,
    ) -> Result<TicketForm, ApiError>;

    /// Delete a form.
    fn delete_ticket_form(&self, cancel: &CancellationToken, id: i64) -> Result<(), ApiError>;
}
