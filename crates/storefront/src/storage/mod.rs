//! Persisted key-value storage backing every storefront store.
//!
//! The storefront keeps its client-side state (session, cart, theme) as
//! string values under a handful of well-known keys. Stores receive the
//! backend as an `Arc<dyn LocalStore>` so the web binary, the CLI and tests
//! can each choose where state lives.
//!
//! # Backends
//!
//! - [`FileStore`] - one JSON object file on disk
//! - [`MemoryStore`] - process-local map, nothing survives a restart

mod file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Value of `STOREFRONT_DATA_PATH` selecting the in-memory backend.
pub const MEMORY_PATH: &str = ":memory:";

/// Storage keys for persisted state.
pub mod keys {
    /// Key for the JSON-encoded current user.
    pub const USER: &str = "user";

    /// Key for the JSON-encoded cart product list.
    pub const CART: &str = "cart";

    /// Key for the dark-mode flag (`"true"` / `"false"`).
    pub const DARK_MODE: &str = "darkMode";
}

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the entries for writing failed.
    #[error("failed to encode storage entries: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A string key-value store with synchronous reads and writes.
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Open the backend named by a configured data path.
///
/// [`MEMORY_PATH`] selects a [`MemoryStore`]; anything else is a file path.
#[must_use]
pub fn open(data_path: &str) -> Arc<dyn LocalStore> {
    if data_path == MEMORY_PATH {
        tracing::warn!("Using in-memory storage, state will not survive a restart");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(data_path))
    }
}
