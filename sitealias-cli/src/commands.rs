//! Command implementations.
//!
//! Each command returns the line(s) it wants printed on success, so the
//! functions stay testable without capturing stdout.

use sitealias_cache::MemoryTier;
use sitealias_plugin::{ResolveError, Resolver};
use sitealias_store::{SettingStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Operator-facing failures, one distinct message per failure class.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Site not found")]
    SiteNotFound,

    #[error("Site already has a custom site id. Use --force to overwrite.")]
    AlreadyExists,

    #[error("Custom site id {0} does not exist.")]
    DoesNotExist(String),

    #[error("store error: {0}")]
    Store(StoreError),
}

/// Sets the custom site id for the site with the given name.
pub fn set(
    store: &SettingStore,
    name: &str,
    custom_site_id: &str,
    force: bool,
) -> Result<String, CommandError> {
    let site_id = match store.site_id_by_name(name) {
        Ok(id) => id,
        Err(StoreError::SiteNotFound(_)) => return Err(CommandError::SiteNotFound),
        Err(e) => return Err(CommandError::Store(e)),
    };
    debug!(%site_id, name, "resolved site name");

    let stored = match store.set_mapping(site_id, custom_site_id, force) {
        Ok(stored) => stored,
        Err(StoreError::AlreadyExists(_)) => return Err(CommandError::AlreadyExists),
        Err(e) => return Err(CommandError::Store(e)),
    };
    Ok(format!("Custom site id '{stored}' set for site '{name}'"))
}

/// Prints the internal site id behind a custom site id.
pub fn get(store: &SettingStore, custom_site_id: &str) -> Result<String, CommandError> {
    match store.site_id_for_custom(custom_site_id) {
        Ok(site_id) => Ok(site_id.to_string()),
        Err(StoreError::NotFound(custom)) => Err(CommandError::DoesNotExist(custom)),
        Err(e) => Err(CommandError::Store(e)),
    }
}

/// Resolves an identifier the way the tracker ingest hook would:
/// numeric ids pass through, aliases are translated.
///
/// Each invocation is its own process, so the resolver runs with fresh
/// cache tiers and always answers from the store.
pub fn resolve(store: &SettingStore, candidate: &str) -> Result<String, CommandError> {
    let mut resolver = Resolver::new(Arc::new(MemoryTier::new()), store);
    match resolver.resolve(candidate) {
        Ok(site_id) => Ok(site_id.to_string()),
        Err(ResolveError::NotFound(custom)) => Err(CommandError::DoesNotExist(custom)),
        Err(ResolveError::Store(e)) => Err(CommandError::Store(e)),
    }
}

/// Registers a site in the settings database.
pub fn add_site(
    store: &SettingStore,
    name: &str,
    url: Option<&str>,
) -> Result<String, CommandError> {
    let site_id = store.add_site(name, url).map_err(CommandError::Store)?;
    Ok(format!("Site '{name}' registered with id {site_id}"))
}
