use pretty_assertions::assert_eq;
use sitealias_plugin::OutboundRewriter;
use sitealias_store::SettingStore;
use sitealias_types::SiteId;

fn store_with_alias(custom: &str) -> (SettingStore, SiteId) {
    let store = SettingStore::open_in_memory().unwrap();
    let id = store.add_site("Shop A", None).unwrap();
    store.set_mapping(id, custom, false).unwrap();
    (store, id)
}

fn bare_store() -> (SettingStore, SiteId) {
    let store = SettingStore::open_in_memory().unwrap();
    let id = store.add_site("Shop A", None).unwrap();
    (store, id)
}

// ── Outbound id ───────────────────────────────────────────────────

#[test]
fn outbound_id_uses_alias_when_stored() {
    let (store, id) = store_with_alias("shopA");
    let rewriter = OutboundRewriter::new(&store);
    assert_eq!(rewriter.rewrite_outbound_id(id).unwrap(), "shopA");
}

#[test]
fn outbound_id_falls_back_to_numeric() {
    let (store, id) = bare_store();
    let rewriter = OutboundRewriter::new(&store);
    assert_eq!(rewriter.rewrite_outbound_id(id).unwrap(), id.to_string());
}

// ── Image tracking URL ────────────────────────────────────────────

#[test]
fn image_url_gets_alias_substituted() {
    let (store, id) = store_with_alias("shopA");
    let rewriter = OutboundRewriter::new(&store);
    let url = format!("https://t.example/piwik.php?idsite={id}&rec=1");
    assert_eq!(
        rewriter.rewrite_image_tracking_url(&url, id).unwrap(),
        "https://t.example/piwik.php?idsite=shopA&rec=1"
    );
}

#[test]
fn image_url_alias_is_url_encoded() {
    let (store, id) = store_with_alias("shop A/1");
    let rewriter = OutboundRewriter::new(&store);
    let url = format!("https://t.example/piwik.php?idsite={id}&rec=1");
    assert_eq!(
        rewriter.rewrite_image_tracking_url(&url, id).unwrap(),
        "https://t.example/piwik.php?idsite=shop%20A%2F1&rec=1"
    );
}

#[test]
fn image_url_without_alias_is_unchanged() {
    let (store, id) = bare_store();
    let rewriter = OutboundRewriter::new(&store);
    let url = format!("https://t.example/piwik.php?idsite={id}&rec=1");
    assert_eq!(rewriter.rewrite_image_tracking_url(&url, id).unwrap(), url);
}

// ── Tracking snippet ──────────────────────────────────────────────

#[test]
fn snippet_set_site_id_gets_alias() {
    let (store, id) = store_with_alias("shopA");
    let rewriter = OutboundRewriter::new(&store);
    let code = format!("_paq.push(['setSiteId', '{id}']);\n_paq.push(['trackPageView']);");
    assert_eq!(
        rewriter.rewrite_tracking_snippet(&code, id).unwrap(),
        "_paq.push(['setSiteId', 'shopA']);\n_paq.push(['trackPageView']);"
    );
}

#[test]
fn snippet_double_quoted_form_is_handled() {
    let (store, id) = store_with_alias("shopA");
    let rewriter = OutboundRewriter::new(&store);
    let code = format!("_paq.push([\"setSiteId\", \"{id}\"]);");
    assert_eq!(
        rewriter.rewrite_tracking_snippet(&code, id).unwrap(),
        "_paq.push([\"setSiteId\", \"shopA\"]);"
    );
}

#[test]
fn snippet_without_alias_is_unchanged() {
    let (store, id) = bare_store();
    let rewriter = OutboundRewriter::new(&store);
    let code = format!("_paq.push(['setSiteId', '{id}']);");
    assert_eq!(rewriter.rewrite_tracking_snippet(&code, id).unwrap(), code);
}

#[test]
fn snippet_other_site_ids_are_untouched() {
    let (store, id) = store_with_alias("shopA");
    let rewriter = OutboundRewriter::new(&store);
    // A different site's id embedded in the page stays as it is.
    let code = "_paq.push(['setSiteId', '999']);".to_string();
    assert_eq!(rewriter.rewrite_tracking_snippet(&code, id).unwrap(), code);
}
