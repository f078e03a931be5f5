//! Session storage
//!
//! A small key-value seam over wherever the visitor's anonymous session id
//! lives: browser `localStorage` in the UI, a JSON file for the CLI, a map in
//! tests.

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Persistent string storage keyed by name
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store scoped to one value's lifetime
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use super::{KeyValueStore, StoreError};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// JSON object on disk, rewritten whole on every `set`
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/folio/session.json`, or `./folio_session.json`
        pub fn default_path() -> PathBuf {
            dirs::data_local_dir()
                .map(|p| p.join("folio").join("session.json"))
                .unwrap_or_else(|| PathBuf::from("./folio_session.json"))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<HashMap<String, String>, StoreError> {
            match std::fs::read_to_string(&self.path) {
                Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
                Ok(content) => Ok(serde_json::from_str(&content)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            match self.read_all() {
                Ok(mut entries) => entries.remove(key),
                Err(e) => {
                    tracing::warn!("Failed to read session store {:?}: {}", self.path, e);
                    None
                }
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            let mut entries = self.read_all()?;
            entries.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("sessionId"), None);
        store.set("sessionId", "abc").unwrap();
        assert_eq!(store.get("sessionId").as_deref(), Some("abc"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileStore::new(&path);
        assert_eq!(store.get("sessionId"), None);
        store.set("sessionId", "abc").unwrap();
        store.set("other", "1").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("sessionId").as_deref(), Some("abc"));
        assert_eq!(reopened.get("other").as_deref(), Some("1"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("sessionId"), None);
        assert!(matches!(
            store.set("sessionId", "x"),
            Err(StoreError::Serialization(_))
        ));
    }
}
