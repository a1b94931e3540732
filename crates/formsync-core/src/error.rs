//! Error types for formsync-core.

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for formsync-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while translating between the declared
/// snapshot and the domain entity.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The store's identifier is non-empty but not a valid integer.
    #[error("could not parse ticket form id '{value}': {source}")]
    IdParse {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The store rejected a write during encode.
    #[error("store rejected write to '{field}': {reason}")]
    Encode { field: String, reason: String },
}
