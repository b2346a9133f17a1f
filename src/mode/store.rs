//! Local key/value flag store.
//!
//! The file-backed store keeps every flag in one JSON object and rewrites the
//! file on each `set`.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access flag store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode flag store {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait FlagStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Flags persisted as a JSON object in a file.
#[derive(Debug)]
pub struct FileFlagStore {
    path: PathBuf,
    flags: IndexMap<String, String>,
}

impl FileFlagStore {
    /// Open the store at `path`. A missing file is an empty store; a file that
    /// is not a JSON object of strings is ignored and overwritten on the next
    /// `set`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let flags = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<IndexMap<String, String>>(&text) {
                Ok(flags) => flags,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring unreadable flag store");
                    IndexMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => IndexMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, flags })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.flags.get(key).cloned()
    }

    /// Writes the file first; the in-memory flags only change on success.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut flags = self.flags.clone();
        flags.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&flags).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.flags = flags;
        Ok(())
    }
}

/// In-memory store, for tests and one-shot runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryFlagStore {
    flags: HashMap<String, String>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.flags.insert(key.to_string(), value.to_string());
        store
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.flags.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.flags.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileFlagStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.get("portfolio-mode"), None);
    }

    #[test]
    fn test_set_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileFlagStore::open(&path).unwrap();
        store.set("portfolio-mode", "terminal").unwrap();
        store.set("other", "1").unwrap();

        let reopened = FileFlagStore::open(&path).unwrap();
        assert_eq!(reopened.get("portfolio-mode").as_deref(), Some("terminal"));
        assert_eq!(reopened.get("other").as_deref(), Some("1"));
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileFlagStore::open(&path).unwrap();
        assert_eq!(store.get("portfolio-mode"), None);
        store.set("portfolio-mode", "gui").unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"portfolio-mode\": \"gui\""));
    }

    #[test]
    fn test_unwritable_path_errors() {
        let dir = TempDir::new().unwrap();
        let mut store = FileFlagStore::open(dir.path().join("missing").join("state.json")).unwrap();
        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryFlagStore::with_flag("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));
    }
}
