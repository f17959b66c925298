//! Persistent store for the custom-id mapping and the site registry.

use crate::error::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};
use sitealias_types::SiteId;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Plugin namespace for rows owned by this plugin.
pub const PLUGIN_NAME: &str = "CustomSiteId";

/// Setting name under which the custom site id is stored.
pub const SETTING_NAME: &str = "custom_site_id";

/// SQLite-backed settings store.
///
/// Holds at most one mapping row per site, keyed by
/// `(idsite, plugin_name, setting_name)`.
pub struct SettingStore {
    conn: Arc<Mutex<Connection>>,
}

impl SettingStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS site (
                idsite INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                main_url TEXT
            );

            CREATE TABLE IF NOT EXISTS site_setting (
                idsite INTEGER NOT NULL,
                plugin_name TEXT NOT NULL,
                setting_name TEXT NOT NULL,
                setting_value TEXT NOT NULL,
                UNIQUE(idsite, plugin_name, setting_name)
            );
            ",
        )?;
        Ok(())
    }

    // ── Site registry ────────────────────────────────────────────

    /// Registers a site and returns its assigned id.
    pub fn add_site(&self, name: &str, main_url: Option<&str>) -> StoreResult<SiteId> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO site (name, main_url) VALUES (?1, ?2)",
            params![name, main_url],
        )?;
        let id = to_site_id(conn.last_insert_rowid())?;
        info!(site = %id, name, "registered site");
        Ok(id)
    }

    /// Resolves a site name to its internal id.
    ///
    /// Fails with [`StoreError::SiteNotFound`] when no site carries the name.
    pub fn site_id_by_name(&self, name: &str) -> StoreResult<SiteId> {
        let conn = self.conn.lock().unwrap();
        let raw: Option<i64> = conn
            .query_row(
                "SELECT idsite FROM site WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        match raw {
            Some(raw) => to_site_id(raw),
            None => Err(StoreError::SiteNotFound(name.to_string())),
        }
    }

    // ── Mapping reads ────────────────────────────────────────────

    /// Source-of-truth lookup: custom site id → internal id.
    ///
    /// Zero matching rows is the expected "unresolved" outcome and comes
    /// back as [`StoreError::NotFound`]; connectivity and query failures
    /// surface as [`StoreError::Database`].
    pub fn site_id_for_custom(&self, custom_id: &str) -> StoreResult<SiteId> {
        let conn = self.conn.lock().unwrap();
        let raw: Option<i64> = conn
            .query_row(
                "SELECT idsite FROM site_setting
                 WHERE plugin_name = ?1 AND setting_name = ?2 AND setting_value = ?3",
                params![PLUGIN_NAME, SETTING_NAME, custom_id],
                |row| row.get(0),
            )
            .optional()?;
        debug!(custom_id, hit = raw.is_some(), "store lookup");
        match raw {
            Some(raw) => to_site_id(raw),
            None => Err(StoreError::NotFound(custom_id.to_string())),
        }
    }

    /// Reverse lookup: internal id → stored custom id, if any.
    ///
    /// An empty stored value counts as absent, matching how the outbound
    /// hooks decide whether to rewrite.
    pub fn custom_id_for_site(&self, site_id: SiteId) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value: Option<String> = conn
            .query_row(
                "SELECT setting_value FROM site_setting
                 WHERE idsite = ?1 AND plugin_name = ?2 AND setting_name = ?3",
                params![site_id.get() as i64, PLUGIN_NAME, SETTING_NAME],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.filter(|v| !v.is_empty()))
    }

    /// Reports whether the site already has a mapping.
    pub fn has_mapping(&self, site_id: SiteId) -> StoreResult<bool> {
        Ok(self.custom_id_for_site(site_id)?.is_some())
    }

    // ── Mapping writes ───────────────────────────────────────────

    /// Creates or updates the mapping for a site, returning the value as
    /// persisted (leading/trailing whitespace trimmed).
    ///
    /// With `overwrite` false an existing mapping fails with
    /// [`StoreError::AlreadyExists`] and nothing is mutated.
    ///
    /// Neither cache tier is invalidated here: a stale entry for the old
    /// custom id can outlive this write until the shared tier evicts it or
    /// the resolving process restarts.
    pub fn set_mapping(
        &self,
        site_id: SiteId,
        custom_id: &str,
        overwrite: bool,
    ) -> StoreResult<String> {
        let value = custom_id.trim().to_string();
        if !overwrite && self.has_mapping(site_id)? {
            return Err(StoreError::AlreadyExists(site_id.get()));
        }
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO site_setting (idsite, plugin_name, setting_name, setting_value)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(idsite, plugin_name, setting_name)
             DO UPDATE SET setting_value = excluded.setting_value",
            params![site_id.get() as i64, PLUGIN_NAME, SETTING_NAME, value],
        )?;
        info!(site = %site_id, custom_id = %value, "custom site id stored");
        Ok(value)
    }
}

/// Converts a raw `idsite` column value, rejecting anything non-positive.
fn to_site_id(raw: i64) -> StoreResult<SiteId> {
    u64::try_from(raw)
        .ok()
        .and_then(|v| SiteId::new(v).ok())
        .ok_or_else(|| StoreError::InvalidData(format!("non-positive idsite {raw}")))
}
