use crate::error::Result;
use crate::store::KeyValueStore;
use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// SQLite-backed key-value slots, one row per key
pub struct SqliteStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn init_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn,
            db_path: PathBuf::from(":memory:"),
        };
        db.setup_tables()?;
        Ok(db)
    }

    pub fn init(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self {
            conn,
            db_path: db_path.to_path_buf(),
        };
        db.setup_tables()?;
        Ok(db)
    }

    /// Get the database file path
    pub fn get_path(&self) -> &Path {
        &self.db_path
    }

    fn setup_tables(&self) -> rusqlite::Result<()> {
        self.conn.execute(
            "CREATE TABLE if not exists kv (
                key text PRIMARY KEY,
                value text NOT NULL,
                modified integer default 0
            )",
            [],
        )?;
        Ok(())
    }

    /// Unix timestamp of the last write to `key`, if it exists
    pub fn modified(&self, key: &str) -> Result<Option<i64>> {
        let modified = self
            .conn
            .query_row("SELECT modified FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(modified)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();

        // Single upsert, so readers never see a half-written slot
        self.conn.execute(
            "INSERT INTO kv (key, value, modified) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, modified = excluded.modified",
            (key, value, timestamp),
        )?;
        Ok(())
    }
}
