//! Error types for the resolution path.

use sitealias_store::StoreError;
use thiserror::Error;

/// Errors that can occur while resolving an identifier.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No mapping exists for the identifier. Expected for a first-ever or
    /// genuinely unknown alias; the caller decides whether the surrounding
    /// request aborts or continues unresolved.
    #[error("custom site id {0} not found")]
    NotFound(String),

    /// The store lookup itself failed. Surfaced rather than swallowed:
    /// silently passing an untranslated identifier through would
    /// misattribute tracking data.
    #[error(transparent)]
    Store(StoreError),
}
