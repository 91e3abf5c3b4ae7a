//! Generic key-value persistence port.
//!
//! The engine's durable state (observation history, insight list, user data)
//! is all small JSON-serializable records, so persistence is abstracted as
//! typed load/save over string keys. Backends live in `tend-storage`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;

/// Storage-agnostic key-value port for small typed records.
///
/// `load` returns `Ok(None)` for a missing key. A corrupt stored value is a
/// `StorageError`; callers that can recover (e.g. by falling back to a
/// defaulted state) are expected to do so at their own layer.
pub trait StateStore {
    /// Load and deserialize the value stored under `key`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;

    /// Serialize and store `value` under `key`, replacing any prior value.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
