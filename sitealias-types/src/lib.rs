//! Core type definitions for sitealias.
//!
//! This crate defines the one type shared by every layer of the plugin:
//! the platform's internal numeric site id. Everything domain-specific
//! (cache tiers, the settings store, the resolver) builds on it.

mod site_id;

pub use site_id::SiteId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid site id: {0}")]
    InvalidSiteId(String),
}
