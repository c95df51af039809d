//! Local key-value storage for submitted enrollments.
//!
//! The wizard writes through the `KvStore` trait so the controller is
//! testable without touching the filesystem. `FileStore` keeps one JSON file
//! per key under the application data directory; `MemoryStore` backs tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::wizard::types::Submission;

/// Fixed key the submission aggregate is stored under
pub const SUBMISSION_KEY: &str = "submission";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("submission serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Minimal key-value interface over the local store.
///
/// Writes are best-effort and synchronous; a single process owns each key.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file per entry
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests. Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

/// Serialize a submission and write it under the fixed key.
///
/// Overwrites any previous entry wholesale; there is no versioning.
pub fn save_submission(store: &dyn KvStore, submission: &Submission) -> Result<(), StorageError> {
    let contents = serde_json::to_string_pretty(submission)?;
    store.set(SUBMISSION_KEY, &contents)
}

/// Read back the stored submission, if any
pub fn load_submission(store: &dyn KvStore) -> Result<Option<Submission>, StorageError> {
    match store.get(SUBMISSION_KEY)? {
        Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        None => Ok(None),
    }
}
