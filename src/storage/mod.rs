//! Device-local key-value persistence
//!
//! The game keeps two small values between runs: the daily word record and the
//! cumulative score. Both go through [`KeyValueStore`] so the game logic never
//! knows whether they live in memory or in a file.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Key of the daily word record
pub const DAILY_WORD_KEY: &str = "dailyWord";

/// Key of the cumulative score
pub const TOTAL_SCORE_KEY: &str = "totalScore";

/// Persisted state that could not be read or written
///
/// Callers treat every variant as "value absent" and carry on.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("state file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("persisted state is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("value for '{key}' is invalid: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// String key-value storage that survives restarts
pub trait KeyValueStore {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
