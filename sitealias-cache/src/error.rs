//! Error types for the cache layer.

use thiserror::Error;

/// Errors that can occur when writing to a cache tier.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The shared tier rejected or failed a write.
    #[error("shared tier error: {0}")]
    Shared(String),
}
