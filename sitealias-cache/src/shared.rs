//! Shared cross-process cache tier.

use crate::error::CacheError;
use sitealias_types::SiteId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Outcome of a shared-tier fetch.
///
/// `Miss` and `Error` are deliberately distinct: a transient backend outage
/// must not be read as "this mapping does not exist". The resolver falls
/// through to the store in both cases but logs the error one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharedFetch {
    /// The key is present with a non-empty value.
    Hit(SiteId),
    /// The key is genuinely absent.
    Miss,
    /// The fetch itself failed; presence of the key is unknown.
    Error(String),
}

/// Capability surface of the cross-process cache tier.
///
/// The backing store (redis, memcached, a shared file) and its eviction and
/// expiry policy belong to the implementation; the resolver only needs these
/// three operations. Writes are best-effort: a failed `save` degrades
/// performance, not correctness, since the store remains the source of truth.
pub trait SharedTier: Send + Sync {
    /// Reports whether an entry exists under the key.
    fn contains(&self, key: &str) -> bool;

    /// Fetches the entry under the key.
    fn fetch(&self, key: &str) -> SharedFetch;

    /// Stores a resolved id under the key, replacing any prior entry.
    fn save(&self, key: &str, id: SiteId) -> Result<(), CacheError>;
}

/// In-memory [`SharedTier`] backed by a mutex-guarded map.
///
/// Serves single-host deployments and tests. Cloning shares the underlying
/// map, mirroring how separate resolver instances would share an external
/// cache backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryTier {
    entries: Arc<Mutex<HashMap<String, SiteId>>>,
}

impl MemoryTier {
    /// Creates an empty tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SharedTier for MemoryTier {
    fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    fn fetch(&self, key: &str) -> SharedFetch {
        match self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            Some(id) => SharedFetch::Hit(*id),
            None => SharedFetch::Miss,
        }
    }

    fn save(&self, key: &str, id: SiteId) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), id);
        Ok(())
    }
}
