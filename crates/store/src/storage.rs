//! Durable key-value slot abstraction.
//!
//! The store persists the whole cart as one string blob under one key.
//! Abstracting the slot keeps the store independent of where that blob
//! lives: a JSON file per key on disk for the real storefront, a plain map
//! for tests.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from the underlying slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the slot failed for a reason other than the key being absent.
    #[error("failed to read key {key:?}: {source}")]
    Read {
        /// The storage key.
        key: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the slot failed.
    #[error("failed to write key {key:?}: {source}")]
    Write {
        /// The storage key.
        key: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// A durable key-value slot holding string blobs.
///
/// Operations are synchronous; there is a single logical thread of control
/// and nothing here suspends.
pub trait StorageSlot {
    /// Read the blob stored under `key`. An absent key is `Ok(None)`, not an
    /// error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed slot: each key is one JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a slot backed by `dir`. The directory is created lazily on the
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageSlot for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write = |key: &str, source| StorageError::Write {
            key: key.to_string(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(|e| write(key, e))?;
        std::fs::write(self.path_for(key), value).map_err(|e| write(key, e))
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
