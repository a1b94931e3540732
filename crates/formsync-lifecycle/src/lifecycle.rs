//! Lifecycle orchestrator: sequences decode, remote call, and encode for
//! each CRUD operation so declared and remote state converge.

use crate::api::{ApiError, TicketFormApi};
use crate::error::{Result, SyncError};
use formsync_core::{codec, format_id, parse_id, ConfigStore};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Drives the ticket form CRUD lifecycle against a remote API capability.
///
/// Each operation issues at most one remote call, blocks until it
/// completes (or the caller's cancellation fires upstream), and surfaces
/// any failure immediately and whole. There is no internal retry and no
/// shared state beyond the store being processed; serializing concurrent
/// operations against the same identifier is the engine's concern.
#[derive(Debug)]
pub struct TicketFormLifecycle<A> {
    api: A,
}

impl<A: TicketFormApi> TicketFormLifecycle<A> {
    /// Wrap a remote API capability.
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Create the declared form remotely and commit the remote-assigned
    /// identity into the store.
    ///
    /// # Errors
    /// Fails on decode, on the remote call, or on encode. A remote
    /// failure commits nothing: the store keeps no partial identifier.
    pub fn create(&self, cancel: &CancellationToken, store: &mut impl ConfigStore) -> Result<()> {
        let form = codec::decode(store)?;
        debug!(name = %form.name, "Decoded declared ticket form");

        let created = self
            .api
            .create_ticket_form(cancel, &form)
            .map_err(|source| SyncError::Remote { op: "create", source })?;

        // A create response without an id is a protocol violation, not a
        // zero identifier to commit.
        let id = created.id.ok_or_else(|| SyncError::Remote {
            op: "create",
            source: ApiError::Rejected("create response carried no id".to_string()),
        })?;

        store.set_id(&format_id(id));
        codec::encode(&created, store)?;

        info!(id, name = %created.name, "Created ticket form");

        Ok(())
    }

    /// Refresh the store from the current remote state.
    ///
    /// Also serves import: the engine writes an out-of-band identifier
    /// into a fresh store entry and calls `read` to bind it.
    ///
    /// # Errors
    /// Fails on a malformed identifier (no remote call is made), on the
    /// remote call, or on encode.
    pub fn read(&self, cancel: &CancellationToken, store: &mut impl ConfigStore) -> Result<()> {
        let id = parse_id(store.id())?;

        let form = self
            .api
            .get_ticket_form(cancel, id)
            .map_err(|source| SyncError::Remote { op: "read", source })?;

        codec::encode(&form, store)?;

        debug!(id, "Refreshed ticket form");

        Ok(())
    }

    /// Push the full declared form to the remote, then commit the remote
    /// response.
    ///
    /// The remote call is a full-resource replace: undeclared fields go
    /// up at their zero value, so the engine must declare the complete
    /// current view rather than a partial diff.
    ///
    /// # Errors
    /// Fails on a missing or malformed identifier, on decode, on the
    /// remote call, or on encode. A remote failure leaves the store as it
    /// was before the call.
    pub fn update(&self, cancel: &CancellationToken, store: &mut impl ConfigStore) -> Result<()> {
        let id = parse_id(store.id())?;
        let form = codec::decode(store)?;

        let updated = self
            .api
            .update_ticket_form(cancel, id, &form)
            .map_err(|source| SyncError::Remote { op: "update", source })?;

        codec::encode(&updated, store)?;

        info!(id, "Updated ticket form");

        Ok(())
    }

    /// Delete the remote form.
    ///
    /// Removing the local entry afterwards is the engine's concern; this
    /// core never erases store fields.
    ///
    /// # Errors
    /// Fails on a malformed identifier or on the remote call, in which
    /// case the local entry must be left untouched by the engine.
    pub fn delete(&self, cancel: &CancellationToken, store: &mut impl ConfigStore) -> Result<()> {
        let id = parse_id(store.id())?;

        self.api
            .delete_ticket_form(cancel, id)
            .map_err(|source| SyncError::Remote { op: "delete", source })?;

        info!(id, "Deleted ticket form");

        Ok(())
    }
}
