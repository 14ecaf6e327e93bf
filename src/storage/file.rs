use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::errors::StorageError;

/// Disk-backed storage: one file per key under a root directory.
///
/// Writes replace the file whole, so two processes writing the same key race
/// with last-write-wins semantics, same as the in-memory backend.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!("{key}: {e}"))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", self.root.display())))?;
        fs::write(self.path_for(key), value)
            .map_err(|e| StorageError::WriteFailed(format!("{key}: {e}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed(format!("{key}: {e}"))),
        }
    }
}
