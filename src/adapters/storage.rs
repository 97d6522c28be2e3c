use crate::domain::ports::Storage;
use crate::utils::error::{ReservationError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Files under a base directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let full_path = self.base_path.join(path);
        match fs::read(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReservationError::storage(full_path.display().to_string(), e)),
        }
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ReservationError::storage(parent.display().to_string(), e))?;
        }

        fs::write(&full_path, data)
            .map_err(|e| ReservationError::storage(full_path.display().to_string(), e))?;
        Ok(())
    }
}

/// In-process storage; every instance is an isolated set of files.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file, e.g. with corrupted content.
    pub fn with_file(self, path: &str, data: impl Into<Vec<u8>>) -> Self {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(path.to_string(), data.into());
        self
    }

    pub fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(path)
            .cloned()
    }
}

impl Storage for MemoryStorage {
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get_file(path))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_storage_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(storage.read_file("hotels.json").unwrap().is_none());
    }

    #[test]
    fn test_local_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested").join("data"));

        storage.write_file("hotels.json", b"[]").unwrap();

        let written = fs::read(temp_dir.path().join("nested/data/hotels.json")).unwrap();
        assert_eq!(written, b"[]");
    }

    #[test]
    fn test_local_storage_overwrites_in_full() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("customers.json", b"[1, 2, 3, 4, 5]").unwrap();
        storage.write_file("customers.json", b"[]").unwrap();

        assert_eq!(storage.read_file("customers.json").unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_local_storage_unwritable_target_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        // a regular file where the data directory should be
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, b"not a directory").unwrap();
        let storage = LocalStorage::new(&blocker);

        let result = storage.write_file("hotels.json", b"[]");
        assert!(matches!(result, Err(ReservationError::StorageError { .. })));
    }

    #[test]
    fn test_memory_storage_instances_are_isolated() {
        let first = MemoryStorage::new();
        let second = MemoryStorage::new();

        first.write_file("hotels.json", b"[]").unwrap();

        assert!(first.read_file("hotels.json").unwrap().is_some());
        assert!(second.read_file("hotels.json").unwrap().is_none());
    }
}
