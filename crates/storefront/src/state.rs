//! Application state shared across handlers.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::catalog::{CatalogClient, CatalogState, ProductEvents};
use crate::config::StorefrontConfig;
use crate::storage::{self, LocalStore};
use crate::stores::{CartError, CartStore, SessionStore, ThemeStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// local storage, the catalog and the product event channel. Stores are
/// handed out fresh on each call so every render starts from persisted
/// state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    storage: Arc<dyn LocalStore>,
    catalog: CatalogState,
    events: ProductEvents,
}

impl AppState {
    /// Create application state from configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let storage = storage::open(&config.data_path);
        let catalog = CatalogState::new(CatalogClient::new(config.catalog_url.clone()));
        Self::from_parts(storage, catalog, ProductEvents::new())
    }

    /// Assemble application state from already-built parts.
    #[must_use]
    pub fn from_parts(
        storage: Arc<dyn LocalStore>,
        catalog: CatalogState,
        events: ProductEvents,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                storage,
                catalog,
                events,
            }),
        }
    }

    /// Get the local storage backend.
    #[must_use]
    pub fn storage(&self) -> Arc<dyn LocalStore> {
        Arc::clone(&self.inner.storage)
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogState {
        &self.inner.catalog
    }

    /// Get a reference to the product event channel.
    #[must_use]
    pub fn events(&self) -> &ProductEvents {
        &self.inner.events
    }

    /// Session store over local storage.
    #[must_use]
    pub fn session(&self) -> SessionStore {
        SessionStore::new(self.storage())
    }

    /// Theme store over local storage.
    #[must_use]
    pub fn theme(&self) -> ThemeStore {
        ThemeStore::new(self.storage())
    }

    /// Load the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns an error if local storage cannot be read.
    pub fn load_cart(&self) -> Result<CartStore, CartError> {
        CartStore::load(self.storage())
    }

    /// Re-fetch the catalog whenever `productsUpdated` is published.
    ///
    /// Abort the returned handle to unsubscribe.
    #[must_use]
    pub fn start_catalog_watcher(&self) -> JoinHandle<()> {
        self.inner.catalog.watch(&self.inner.events)
    }
}
