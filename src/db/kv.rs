//! Durable key-value medium behind the record store.
//!
//! Each record collection is stored as one JSON document under a fixed
//! key. The store never needs range scans or partial updates, so the
//! contract is get/set/remove on whole values.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection};

use super::sqlite::{open_database, open_memory_database};
use super::DatabaseError;

/// Whole-value key-value storage.
pub trait KeyValueStore: Send {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, DatabaseError>;

    /// Writes the value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), DatabaseError>;

    /// Removes the key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), DatabaseError>;
}

// ═══════════════════════════════════════════
// SQLite-backed store
// ═══════════════════════════════════════════

/// Key-value store over the `collections` table.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (or create) the database file and run migrations.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self::new(open_database(path)?))
    }

    /// In-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Ok(Self::new(open_memory_database()?))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM collections WHERE key = ?1")?;
        match stmt.query_row([key], |row| row.get::<_, String>(0)) {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::from(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO collections (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM collections WHERE key = ?1", [key])?;
        Ok(())
    }
}

// ═══════════════════════════════════════════
// In-memory store
// ═══════════════════════════════════════════

/// Non-durable store for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value (builder style).
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DatabaseError> {
        self.entries.remove(key);
        Ok(())
    }
}
