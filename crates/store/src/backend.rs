//! Pluggable storage backends.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StoreError;

/// A flat key/value store for JSON documents.
///
/// Reads and writes are synchronous: every committed settings mutation is
/// flushed before the call returns, so the persisted value always matches
/// the last committed in-memory value.
pub trait StorageBackend: Send + Sync {
    /// Read the raw document under `key`. `Ok(None)` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw document under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// FileBackend
// ---------------------------------------------------------------------------

/// One `<key>.json` file per key under a base directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryBackend
// ---------------------------------------------------------------------------

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().expect("settings backend lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("settings backend lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.read("missing").unwrap().is_none());
        backend.write("k", "{\"a\":1}").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        assert!(backend.read("missing").unwrap().is_none());
        backend.write("sm_prompts", "{}").unwrap();
        assert_eq!(backend.read("sm_prompts").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("sm_prompts.json").exists());
    }

    #[test]
    fn file_backend_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let backend = FileBackend::new(&nested).unwrap();
        backend.write("k", "1").unwrap();
        assert!(nested.join("k.json").exists());
    }
}
