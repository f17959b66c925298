//! Process-local cache tier.

use sitealias_types::SiteId;
use std::collections::HashMap;

/// In-process map from cache key to resolved site id.
///
/// Owned by one resolver instance; created empty, populated lazily on cache
/// misses, discarded when the resolver is dropped. Not shared across threads
/// or processes, so reads and writes are plain map operations with no
/// locking and no serialization.
#[derive(Debug, Default)]
pub struct LocalTier {
    entries: HashMap<String, SiteId>,
}

impl LocalTier {
    /// Creates an empty tier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cache key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<SiteId> {
        self.entries.get(key).copied()
    }

    /// Records a resolved id under its cache key.
    pub fn insert(&mut self, key: String, id: SiteId) {
        self.entries.insert(key, id);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
