//! Key-value storage contract and SQLite implementation.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings; structure is owned by callers.
//! - `set_item` replaces the previous value in full.
//! - Removing a missing key is not an error.

use crate::db::{open_db, open_db_in_memory};
use crate::repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Key holding the JSON-encoded entry list, newest first.
pub const ENTRIES_KEY: &str = "entries";
/// Key holding the trimmed display name.
pub const USERNAME_KEY: &str = "username";
/// Key holding the profile picture reference; absent when unset.
pub const PROFILE_PIC_KEY: &str = "profilePic";

/// Storage contract for string values addressed by logical key.
pub trait KeyValueStore: Send {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()>;
    fn remove_item(&mut self, key: &str) -> RepoResult<()>;
}

/// Process-wide handle to one store.
///
/// The mutex is the critical section for every read-modify-write sequence.
pub type SharedStore<S> = Arc<Mutex<S>>;

/// Wraps a store into a shareable handle.
pub fn share_store<S: KeyValueStore>(store: S) -> SharedStore<S> {
    Arc::new(Mutex::new(store))
}

/// SQLite-backed key-value store over the `kv_store` table.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Wraps an already-migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
