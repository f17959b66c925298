//! SQLite storage layer for sitealias.
//!
//! The platform keeps per-site settings in a generic
//! `(idsite, plugin_name, setting_name, setting_value)` table; this crate
//! owns the rows scoped to plugin `CustomSiteId` / setting `custom_site_id`,
//! which hold the custom-id → internal-id mapping. It is the single source
//! of truth behind both cache tiers.
//!
//! A minimal `site` table stands in for the platform's site registry so the
//! administrative commands can resolve a site name to its internal id.

mod error;
mod setting_store;

pub use error::{StoreError, StoreResult};
pub use setting_store::{SettingStore, PLUGIN_NAME, SETTING_NAME};
