use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StudyError;

use super::connection;

/// Best-effort string-keyed storage of JSON values.
///
/// Reads never fail: a missing key, a malformed value, and a backend error all
/// come back as `None`. Writes never fail either; a dropped write is logged and
/// otherwise invisible to the caller.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&self, key: &str, value: &str);

    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring malformed stored value");
                None
            }
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T)
    where
        Self: Sized,
    {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_raw(key, &raw),
            Err(e) => tracing::warn!(key, error = %e, "dropping unserializable value"),
        }
    }
}

/// SQLite-backed store: one row per key in the `kv` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the store in an initialized data directory.
    pub fn open(dir: &Path) -> Result<Self, StudyError> {
        Ok(Self::new(connection::open_db(dir)?))
    }
}

impl KeyValueStore for SqliteStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        let result = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional();
        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed");
                None
            }
        }
    }

    fn set_raw(&self, key: &str, value: &str) {
        let result = self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            params![key, value],
        );
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "store write dropped");
        }
    }
}

/// In-process store. `failing` simulates an unavailable backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        if self.failing.get() {
            tracing::warn!(key, "store read failed: backend unavailable");
            return None;
        }
        self.entries.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) {
        if self.failing.get() {
            tracing::warn!(key, "store write dropped: backend unavailable");
            return;
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
