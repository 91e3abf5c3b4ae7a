//! SQLite state store: one `state` table, WAL mode, prepare_cached.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use tend_core::errors::StorageError;
use tend_core::traits::StateStore;

/// Durable key-value backend over a single SQLite table.
///
/// The whole persisted state fits in a handful of small JSON records, so
/// one `state(key, value)` table covers every key the repository uses.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
            message: format!("failed to open database: {e}"),
        })?;
        Self::init(conn)
    }

    /// In-memory database, handy for tests and ephemeral sessions.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
            message: format!("failed to open in-memory database: {e}"),
        })?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             CREATE TABLE IF NOT EXISTS state (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )
        .map_err(|e| StorageError::SqliteError {
            message: format!("failed to initialize schema: {e}"),
        })?;
        Ok(Self { conn })
    }
}

impl StateStore for SqliteStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM state WHERE key = ?1")
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

        let json: Option<String> = stmt
            .query_row(params![key], |row| row.get(0))
            .optional()
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        let mut stmt = self
            .conn
            .prepare_cached(
                "INSERT INTO state (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        stmt.execute(params![key, json])
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        debug!(key, bytes = json.len(), "state saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM state WHERE key = ?1", params![key])
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tend_core::types::{Habit, TimeAnchor};

    #[test]
    fn test_save_load_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut habit = Habit::new("h1", "Meditation");
        habit.time_anchor = TimeAnchor::Morning;
        store.save("habits", &vec![habit.clone()]).unwrap();

        let loaded: Option<Vec<Habit>> = store.load("habits").unwrap();
        assert_eq!(loaded, Some(vec![habit]));
    }

    #[test]
    fn test_save_replaces_prior_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save("k", &"first".to_string()).unwrap();
        store.save("k", &"second".to_string()).unwrap();

        let loaded: Option<String> = store.load("k").unwrap();
        assert_eq!(loaded.as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_and_missing_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save("k", &1u32).unwrap();
        store.remove("k").unwrap();
        let loaded: Option<u32> = store.load("k").unwrap();
        assert_eq!(loaded, None);
        let never: Option<u32> = store.load("never").unwrap();
        assert_eq!(never, None);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tend.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.save("k", &vec!["a".to_string(), "b".to_string()]).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let loaded: Option<Vec<String>> = store.load("k").unwrap();
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));
    }
}
