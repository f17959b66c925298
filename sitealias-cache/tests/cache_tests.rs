use pretty_assertions::assert_eq;
use sitealias_cache::{cache_key, LocalTier, MemoryTier, SharedFetch, SharedTier};
use sitealias_types::SiteId;

fn site(raw: u64) -> SiteId {
    SiteId::new(raw).unwrap()
}

// ── Local tier ────────────────────────────────────────────────────

#[test]
fn local_tier_starts_empty() {
    let tier = LocalTier::new();
    assert!(tier.is_empty());
    assert_eq!(tier.get(&cache_key("shopA")), None);
}

#[test]
fn local_tier_stores_and_returns_entries() {
    let mut tier = LocalTier::new();
    let key = cache_key("shopA");
    tier.insert(key.clone(), site(7));
    assert_eq!(tier.get(&key), Some(site(7)));
    assert_eq!(tier.len(), 1);
}

#[test]
fn local_tier_replaces_on_duplicate_key() {
    let mut tier = LocalTier::new();
    let key = cache_key("shopA");
    tier.insert(key.clone(), site(7));
    tier.insert(key.clone(), site(9));
    assert_eq!(tier.get(&key), Some(site(9)));
    assert_eq!(tier.len(), 1);
}

#[test]
fn local_tier_keys_are_namespaced() {
    let mut tier = LocalTier::new();
    tier.insert(cache_key("a"), site(1));
    // The raw identifier alone is not a key.
    assert_eq!(tier.get("a"), None);
}

// ── Memory shared tier ────────────────────────────────────────────

#[test]
fn memory_tier_miss_is_not_error() {
    let tier = MemoryTier::new();
    assert!(!tier.contains(&cache_key("shopA")));
    assert_eq!(tier.fetch(&cache_key("shopA")), SharedFetch::Miss);
}

#[test]
fn memory_tier_save_then_fetch() {
    let tier = MemoryTier::new();
    let key = cache_key("shopA");
    tier.save(&key, site(7)).unwrap();
    assert!(tier.contains(&key));
    assert_eq!(tier.fetch(&key), SharedFetch::Hit(site(7)));
}

#[test]
fn memory_tier_save_replaces() {
    let tier = MemoryTier::new();
    let key = cache_key("shopA");
    tier.save(&key, site(7)).unwrap();
    tier.save(&key, site(12)).unwrap();
    assert_eq!(tier.fetch(&key), SharedFetch::Hit(site(12)));
    assert_eq!(tier.len(), 1);
}

#[test]
fn memory_tier_clones_share_storage() {
    let tier = MemoryTier::new();
    let other = tier.clone();
    tier.save(&cache_key("shopA"), site(7)).unwrap();
    assert_eq!(other.fetch(&cache_key("shopA")), SharedFetch::Hit(site(7)));
}

#[test]
fn memory_tier_is_usable_across_threads() {
    let tier = MemoryTier::new();
    let writer = tier.clone();
    let handle = std::thread::spawn(move || {
        writer.save(&cache_key("shopA"), site(7)).unwrap();
    });
    handle.join().unwrap();
    assert_eq!(tier.fetch(&cache_key("shopA")), SharedFetch::Hit(site(7)));
}
