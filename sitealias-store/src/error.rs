//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in storage operations.
///
/// "Not found" outcomes are ordinary results of a lookup, kept apart from
/// [`StoreError::Database`] so callers never mistake a connectivity failure
/// for a missing mapping.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No mapping exists for the given custom site id.
    #[error("custom site id {0} not found")]
    NotFound(String),

    /// No site with the given name exists.
    #[error("site not found: {0}")]
    SiteNotFound(String),

    /// The site already has a mapping and overwrite was not requested.
    #[error("site {0} already has a custom site id")]
    AlreadyExists(u64),

    /// A stored value violated an invariant (e.g. a non-positive idsite).
    #[error("invalid data: {0}")]
    InvalidData(String),
}
