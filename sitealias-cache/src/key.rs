//! Cache key derivation.

/// Namespace prefix shared by both tiers. Keys derived from distinct raw
/// identifiers never collide because the raw identifier is appended verbatim.
const CACHE_KEY_PREFIX: &str = "CustomSiteId-";

/// Derives the cache key for a raw identifier.
///
/// Deterministic: the same identifier always yields the same key, so the
/// local and shared tiers agree on where an entry lives.
#[must_use]
pub fn cache_key(raw: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{raw}")
}
