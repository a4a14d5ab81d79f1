//! File-backed storage backend.
//!
//! All keys live in a single JSON object. Every write rewrites the whole
//! file; the map is small (a user record, a cart and a flag).
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the target, so readers in other processes (the CLI next to the
//! server) see either the old or the new contents, never a partial file.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;

use super::{LocalStore, StorageError};

type Entries = BTreeMap<String, String>;

/// [`LocalStore`] persisted to a JSON file.
///
/// Access is serialized within the process. Other processes writing the same
/// file are not coordinated with; the last writer wins, but every write
/// replaces the file atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;

        let contents = serde_json::to_string_pretty(entries).map_err(StorageError::Encode)?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| io_error(dir, source))?;
        staged
            .write_all(contents.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|source| io_error(staged.path(), source))?;
        staged
            .persist(&self.path)
            .map_err(|e| io_error(&self.path, e.error))?;
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)?;
        tracing::debug!(key, path = %self.path.display(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
            tracing::debug!(key, path = %self.path.display(), "Removed value");
        }
        Ok(())
    }
}
