//! Outbound rewrite hooks.
//!
//! The reverse direction of the plugin: where the platform emits a site id
//! (image tracking URLs, generated JS snippets), substitute the stored
//! alias so client-facing artifacts never expose the internal id. This is
//! a direct per-site settings read — the tiered cache is for ingest only.

use sitealias_store::{SettingStore, StoreResult};
use sitealias_types::SiteId;

/// Per-site reverse lookup: internal id → stored custom id.
pub trait ReverseSource {
    /// Returns the custom id stored for the site, if any.
    fn custom_id_for_site(&self, site_id: SiteId) -> StoreResult<Option<String>>;
}

impl ReverseSource for SettingStore {
    fn custom_id_for_site(&self, site_id: SiteId) -> StoreResult<Option<String>> {
        SettingStore::custom_id_for_site(self, site_id)
    }
}

impl<T: ReverseSource + ?Sized> ReverseSource for &T {
    fn custom_id_for_site(&self, site_id: SiteId) -> StoreResult<Option<String>> {
        (**self).custom_id_for_site(site_id)
    }
}

impl<T: ReverseSource + ?Sized> ReverseSource for std::sync::Arc<T> {
    fn custom_id_for_site(&self, site_id: SiteId) -> StoreResult<Option<String>> {
        (**self).custom_id_for_site(site_id)
    }
}

/// Rewrites outbound tracking artifacts with a site's custom id.
pub struct OutboundRewriter<R: ReverseSource> {
    source: R,
}

impl<R: ReverseSource> OutboundRewriter<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns the identifier the outside world should see for a site:
    /// the stored custom id, or the numeric id when no alias exists.
    pub fn rewrite_outbound_id(&self, site: SiteId) -> StoreResult<String> {
        Ok(self
            .source
            .custom_id_for_site(site)?
            .unwrap_or_else(|| site.to_string()))
    }

    /// Rewrites the `idsite` query parameter of an image tracking URL with
    /// the url-encoded custom id. URLs for sites without an alias come
    /// back unchanged.
    pub fn rewrite_image_tracking_url(&self, url: &str, site: SiteId) -> StoreResult<String> {
        let Some(custom) = self.source.custom_id_for_site(site)? else {
            return Ok(url.to_string());
        };
        Ok(replace_query_param(url, "idsite", &urlencoding::encode(&custom)))
    }

    /// Rewrites the site id argument of the `setSiteId` call in a
    /// generated tracking snippet. Snippets for sites without an alias
    /// come back unchanged.
    pub fn rewrite_tracking_snippet(&self, code: &str, site: SiteId) -> StoreResult<String> {
        let Some(custom) = self.source.custom_id_for_site(site)? else {
            return Ok(code.to_string());
        };
        // Both quoting styles the platform's snippet generator emits.
        let out = code.replace(
            &format!("'setSiteId', '{site}'"),
            &format!("'setSiteId', '{custom}'"),
        );
        Ok(out.replace(
            &format!("\"setSiteId\", \"{site}\""),
            &format!("\"setSiteId\", \"{custom}\""),
        ))
    }
}

/// Replaces the value of one query parameter, leaving everything else
/// byte-for-byte intact. A URL without a query string is returned as-is.
fn replace_query_param(url: &str, name: &str, value: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let rewritten: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((k, _)) if k == name => format!("{k}={value}"),
            _ => pair.to_string(),
        })
        .collect();
    format!("{base}?{}", rewritten.join("&"))
}
