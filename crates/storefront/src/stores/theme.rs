//! Theme preference store.

use std::sync::Arc;

use crate::storage::{LocalStore, StorageError, keys};

/// Persisted dark-mode flag, independent of the session.
#[derive(Clone)]
pub struct ThemeStore {
    storage: Arc<dyn LocalStore>,
}

impl ThemeStore {
    /// Create a store over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn LocalStore>) -> Self {
        Self { storage }
    }

    /// Whether dark mode is on. Anything but `"true"` reads as off.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn is_dark_mode(&self) -> Result<bool, StorageError> {
        Ok(self.storage.get(keys::DARK_MODE)?.as_deref() == Some("true"))
    }

    /// Persist the dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), StorageError> {
        self.storage
            .set(keys::DARK_MODE, if enabled { "true" } else { "false" })
    }

    /// Flip the flag and return the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written.
    pub fn toggle(&self) -> Result<bool, StorageError> {
        let enabled = !self.is_dark_mode()?;
        self.set_dark_mode(enabled)?;
        tracing::debug!(dark_mode = enabled, "Theme toggled");
        Ok(enabled)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let theme = ThemeStore::new(Arc::new(MemoryStore::new()));
        assert!(!theme.is_dark_mode().unwrap());
    }

    #[test]
    fn test_toggle_persists_string_flag() {
        let storage: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        let theme = ThemeStore::new(Arc::clone(&storage));

        assert!(theme.toggle().unwrap());
        assert_eq!(storage.get(keys::DARK_MODE).unwrap().as_deref(), Some("true"));

        assert!(!theme.toggle().unwrap());
        assert_eq!(storage.get(keys::DARK_MODE).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_unexpected_value_reads_as_off() {
        let storage: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        storage.set(keys::DARK_MODE, "yes").unwrap();
        assert!(!ThemeStore::new(storage).is_dark_mode().unwrap());
    }
}
