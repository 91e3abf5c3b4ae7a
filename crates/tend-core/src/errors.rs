//! Error types shared across Tend crates.
//!
//! "Nothing to show" is never an error in this engine — detectors and
//! generators signal it with empty output. These enums cover the genuinely
//! exceptional paths: invalid arguments at function boundaries and
//! persistence failures.

use thiserror::Error;

/// Errors raised by the analysis engine at its function boundaries.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The detection lookback window must cover at least one day.
    #[error("invalid lookback window: {days} days")]
    InvalidLookback { days: u32 },
}

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    #[error("serialization error: {message}")]
    SerdeError { message: String },

    #[error("state lock poisoned")]
    LockPoisoned,
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::SerdeError {
            message: e.to_string(),
        }
    }
}
