//! Identifier resolution over the tiered cache.

use crate::error::ResolveError;
use sitealias_cache::{cache_key, LocalTier, SharedFetch, SharedTier};
use sitealias_store::{SettingStore, StoreError, StoreResult};
use sitealias_types::SiteId;
use std::sync::Arc;
use tracing::{debug, warn};

/// Source-of-truth lookup behind both cache tiers.
///
/// [`SettingStore`] is the production implementation; tests substitute
/// counting or failing doubles to observe the resolver's lookup behavior.
pub trait MappingSource {
    /// Resolves a custom site id to the internal id, or
    /// [`StoreError::NotFound`] when no mapping exists.
    fn site_id_for_custom(&self, custom_id: &str) -> StoreResult<SiteId>;
}

impl MappingSource for SettingStore {
    fn site_id_for_custom(&self, custom_id: &str) -> StoreResult<SiteId> {
        SettingStore::site_id_for_custom(self, custom_id)
    }
}

impl<T: MappingSource + ?Sized> MappingSource for &T {
    fn site_id_for_custom(&self, custom_id: &str) -> StoreResult<SiteId> {
        (**self).site_id_for_custom(custom_id)
    }
}

impl<T: MappingSource + ?Sized> MappingSource for Arc<T> {
    fn site_id_for_custom(&self, custom_id: &str) -> StoreResult<SiteId> {
        (**self).site_id_for_custom(custom_id)
    }
}

/// Translates incoming identifiers to internal site ids.
///
/// Owns its local cache tier outright; the tier's lifetime is exactly the
/// lifetime of this value, typically one process or one request. Anything
/// that needs translation is handed the resolver explicitly — there is no
/// ambient cache state.
pub struct Resolver<S: MappingSource> {
    local: LocalTier,
    shared: Arc<dyn SharedTier>,
    source: S,
}

impl<S: MappingSource> Resolver<S> {
    /// Creates a resolver with an empty local tier.
    pub fn new(shared: Arc<dyn SharedTier>, source: S) -> Self {
        Self {
            local: LocalTier::new(),
            shared,
            source,
        }
    }

    /// Resolves a candidate identifier to an internal site id.
    ///
    /// A candidate that is already a positive integer is returned as-is
    /// without touching any tier or the store — the overwhelmingly common
    /// case on the ingest path. Anything else is treated as an alias and
    /// looked up local tier → shared tier → store, with both tiers
    /// populated on the way back from a store hit.
    pub fn resolve(&mut self, candidate: &str) -> Result<SiteId, ResolveError> {
        if let Some(id) = SiteId::from_candidate(candidate) {
            return Ok(id);
        }

        let key = cache_key(candidate);

        if let Some(id) = self.local.get(&key) {
            debug!(%key, %id, "local tier hit");
            return Ok(id);
        }

        if self.shared.contains(&key) {
            match self.shared.fetch(&key) {
                SharedFetch::Hit(id) => {
                    debug!(%key, %id, "shared tier hit");
                    self.local.insert(key, id);
                    return Ok(id);
                }
                // An empty or vanished entry falls through to the store.
                SharedFetch::Miss => {}
                SharedFetch::Error(reason) => {
                    warn!(%key, reason, "shared tier fetch failed, falling back to store");
                }
            }
        }

        let id = match self.source.site_id_for_custom(candidate) {
            Ok(id) => id,
            Err(StoreError::NotFound(custom)) => return Err(ResolveError::NotFound(custom)),
            Err(e) => return Err(ResolveError::Store(e)),
        };

        // Write-through: shared tier first, then local. A failed shared
        // save costs the next process a store query, nothing more.
        if let Err(e) = self.shared.save(&key, id) {
            warn!(%key, error = %e, "shared tier save failed");
        }
        self.local.insert(key, id);
        debug!(candidate, %id, "resolved from store");
        Ok(id)
    }

    /// Ingest hook: translate the site id field of an incoming request.
    ///
    /// An absent field is a pass-through — no translation, no error; the
    /// host decides what an id-less request means.
    pub fn translate_on_ingest(
        &mut self,
        idsite: Option<&str>,
    ) -> Result<Option<SiteId>, ResolveError> {
        match idsite {
            None => Ok(None),
            Some(raw) => self.resolve(raw).map(Some),
        }
    }

    /// Read access to the local tier, mainly for inspection in tests.
    #[must_use]
    pub fn local_tier(&self) -> &LocalTier {
        &self.local
    }
}
