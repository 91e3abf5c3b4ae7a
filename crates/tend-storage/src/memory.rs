//! In-memory state store, used as the test backend.

use std::sync::Mutex;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use tend_core::errors::StorageError;
use tend_core::traits::StateStore;

/// Key-value store over a mutex-guarded map. Values are kept as JSON text
/// so serialization behaves identically to the SQLite backend.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under a key, bypassing serialization. Lets tests
    /// exercise the corrupt-value recovery path.
    pub fn insert_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl StateStore for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::LockPoisoned)?;
        match values.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        let mut values = self.values.lock().map_err(|_| StorageError::LockPoisoned)?;
        values.insert(key.to_string(), json);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove_round_trip() {
        let store = MemoryStore::new();
        store.save("counts", &vec![1u32, 2, 3]).unwrap();

        let loaded: Option<Vec<u32>> = store.load("counts").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));

        store.remove("counts").unwrap();
        let gone: Option<Vec<u32>> = store.load("counts").unwrap();
        assert_eq!(gone, None);
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<String> = store.load("nothing").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_corrupt_value_is_serde_error() {
        let store = MemoryStore::new();
        store.insert_raw("state", "{not json").unwrap();
        let result: Result<Option<Vec<u32>>, _> = store.load("state");
        assert!(matches!(result, Err(StorageError::SerdeError { .. })));
    }
}
