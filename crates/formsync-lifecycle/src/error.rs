//! Error types for the lifecycle orchestrator.

use crate::api::ApiError;
use formsync_core::CoreError;
use thiserror::Error;

/// Result type alias for lifecycle operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors surfaced to the configuration engine by a lifecycle operation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote API call failed; the store was left as it was before
    /// the call.
    #[error("remote api call failed during {op}: {source}")]
    Remote {
        op: &'static str,
        #[source]
        source: ApiError,
    },

    /// Identifier parse or encode failure from the translation layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}
