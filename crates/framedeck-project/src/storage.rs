//! The persistence collaborator: read/write text at a path.

use std::collections::HashMap;
use std::sync::Mutex;

use framedeck_core::{FramedeckError, Result};

/// Text persistence primitive consumed by the service. Both operations are
/// fallible with a persistence error kind.
pub trait Storage: Send + Sync {
    fn read_text(&self, path: &str) -> Result<String>;
    fn write_text(&self, path: &str, text: &str) -> Result<()>;
}

/// Filesystem-backed storage used in production.
#[derive(Debug, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read_text(&self, path: &str) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|e| FramedeckError::Persistence(format!("Failed to read '{path}': {e}")))
    }

    fn write_text(&self, path: &str, text: &str) -> Result<()> {
        std::fs::write(path, text)
            .map_err(|e| FramedeckError::Persistence(format!("Failed to write '{path}': {e}")))
    }
}

/// In-memory storage for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back a written file without going through the trait.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().expect("storage lock poisoned").get(path).cloned()
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.lock().expect("storage lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read_text(&self, path: &str) -> Result<String> {
        self.files
            .lock()
            .expect("storage lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| FramedeckError::Persistence(format!("No such file: '{path}'")))
    }

    fn write_text(&self, path: &str, text: &str) -> Result<()> {
        self.files
            .lock()
            .expect("storage lock poisoned")
            .insert(path.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.write_text("/p/a.fdk", "hello").unwrap();
        assert_eq!(storage.read_text("/p/a.fdk").unwrap(), "hello");
        assert!(storage.read_text("/p/missing.fdk").is_err());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_fs_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.fdk");
        let path = path.to_string_lossy().to_string();

        let storage = FsStorage;
        storage.write_text(&path, "on disk").unwrap();
        assert_eq!(storage.read_text(&path).unwrap(), "on disk");
    }

    #[test]
    fn test_fs_storage_read_error_is_persistence() {
        let err = FsStorage.read_text("/definitely/not/here.fdk").unwrap_err();
        assert!(matches!(err, FramedeckError::Persistence(_)));
    }
}
