//! Product catalog fetched from the listing endpoint.
//!
//! # Architecture
//!
//! - [`CatalogClient`] performs one `GET` of the listing endpoint and decodes
//!   a JSON array of products. No caching, retry or timeout.
//! - [`Catalog`] partitions a product list into one bucket per category.
//! - [`CatalogState`] holds the last successfully fetched catalog. A failed
//!   refresh is logged and the previous catalog stays in place.
//! - [`ProductEvents`] carries the `productsUpdated` signal;
//!   [`CatalogState::watch`] re-fetches on every event.
//!
//! Overlapping refreshes are not de-duplicated. Whichever resolves last
//! wins.

mod events;

use std::sync::Arc;

use buildmart_core::{Category, Product, ProductId};
use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::instrument;
use url::Url;

pub use events::{ProductEvents, ProductsUpdated};

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint returned status {0}")]
    Status(u16),

    /// The body was not a JSON array of products.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// Catalog
// =============================================================================

/// Products partitioned by category, in endpoint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    material: Vec<Product>,
    machine: Vec<Product>,
    worker: Vec<Product>,
}

impl Catalog {
    /// Split `products` into category buckets.
    #[must_use]
    pub fn partition(products: Vec<Product>) -> Self {
        let mut catalog = Self::default();
        for product in products {
            catalog.bucket_mut(product.category).push(product);
        }
        catalog
    }

    /// Products listed under `category`.
    #[must_use]
    pub fn products(&self, category: Category) -> &[Product] {
        match category {
            Category::Material => &self.material,
            Category::Machine => &self.machine,
            Category::Worker => &self.worker,
        }
    }

    /// Look a product up by id across all categories.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }

    /// All products, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.products(category).iter())
    }

    /// Total number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.material.len() + self.machine.len() + self.worker.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Product> {
        match category {
            Category::Material => &mut self.material,
            Category::Machine => &mut self.machine,
            Category::Worker => &mut self.worker,
        }
    }
}

// =============================================================================
// CatalogClient
// =============================================================================

/// HTTP client for the product listing endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a client for `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self::with_http_client(endpoint, reqwest::Client::new())
    }

    /// Create a client for `endpoint` reusing an existing HTTP client.
    #[must_use]
    pub fn with_http_client(endpoint: Url, client: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner { client, endpoint }),
        }
    }

    /// Fetch every product from the listing endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// body that is not a JSON array of products.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        // Read as text first so parse errors carry serde's position info
        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }
}

// =============================================================================
// CatalogState
// =============================================================================

/// Last known catalog plus the client that refreshes it.
///
/// Cheaply cloneable; clones share the same catalog.
#[derive(Clone)]
pub struct CatalogState {
    client: CatalogClient,
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogState {
    /// Create an empty state that refreshes through `client`.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            current: Arc::new(RwLock::new(Arc::new(Catalog::default()))),
        }
    }

    /// The catalog as of the last successful fetch.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&*self.current.read())
    }

    /// Fetch the catalog and replace the held one.
    ///
    /// On failure the error is logged and the previous catalog is kept.
    /// Returns whichever catalog is held afterwards.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Arc<Catalog> {
        match self.client.fetch_all().await {
            Ok(products) => {
                let catalog = Arc::new(Catalog::partition(products));
                tracing::info!(products = catalog.len(), "Catalog refreshed");
                *self.current.write() = Arc::clone(&catalog);
                catalog
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch products, keeping previous catalog");
                self.snapshot()
            }
        }
    }

    /// Refresh on every [`ProductsUpdated`] event.
    ///
    /// The task ends when the channel closes. Abort the handle to
    /// unsubscribe earlier.
    pub fn watch(&self, events: &ProductEvents) -> JoinHandle<()> {
        let mut receiver = events.subscribe();
        let state = self.clone();

        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(ProductsUpdated) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Missed productsUpdated events");
                    }
                    Err(RecvError::Closed) => break,
                }
                state.refresh().await;
            }
            tracing::debug!("Product event channel closed, catalog watcher stopped");
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
    use buildmart_core::Price;

    use super::*;

    fn product(id: i64, name: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(1000),
            image: String::new(),
            description: String::new(),
            category,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Cement", Category::Material),
            product(2, "Excavator", Category::Machine),
            product(3, "Bricks", Category::Material),
            product(4, "Mason", Category::Worker),
        ]
    }

    #[derive(Default)]
    struct Upstream {
        failing: AtomicBool,
        hits: AtomicUsize,
    }

    /// Serve `sample()` from a throwaway listener, failing with 500 while
    /// `failing` is set.
    async fn serve(upstream: Arc<Upstream>) -> CatalogClient {
        let router = Router::new().route(
            "/api/products",
            get(move || {
                let upstream = Arc::clone(&upstream);
                async move {
                    upstream.hits.fetch_add(1, Ordering::SeqCst);
                    if upstream.failing.load(Ordering::SeqCst) {
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    } else {
                        Json(sample()).into_response()
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let endpoint = Url::parse(&format!("http://{addr}/api/products")).unwrap();
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        CatalogClient::with_http_client(endpoint, http)
    }

    #[test]
    fn test_partition_preserves_order() {
        let catalog = Catalog::partition(sample());
        let materials: Vec<_> = catalog
            .products(Category::Material)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(materials, ["Cement", "Bricks"]);
        assert_eq!(catalog.products(Category::Machine).len(), 1);
        assert_eq!(catalog.products(Category::Worker).len(), 1);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::partition(sample());
        assert_eq!(catalog.find(ProductId::new(4)).unwrap().name, "Mason");
        assert!(catalog.find(ProductId::new(99)).is_none());
    }

    #[tokio::test]
    async fn test_fetch_all() {
        let client = serve(Arc::new(Upstream::default())).await;
        let products = client.fetch_all().await.unwrap();
        assert_eq!(products, sample());
    }

    #[tokio::test]
    async fn test_fetch_all_rejects_error_status() {
        let upstream = Arc::new(Upstream::default());
        upstream.failing.store(true, Ordering::SeqCst);
        let client = serve(upstream).await;

        assert!(matches!(
            client.fetch_all().await,
            Err(CatalogError::Status(500))
        ));
    }

    #[tokio::test]
    async fn test_refresh_keeps_previous_catalog_on_error() {
        let upstream = Arc::new(Upstream::default());
        let state = CatalogState::new(serve(Arc::clone(&upstream)).await);

        let fresh = state.refresh().await;
        assert_eq!(fresh.len(), 4);

        upstream.failing.store(true, Ordering::SeqCst);
        let stale = state.refresh().await;
        assert_eq!(*stale, *fresh);
        assert_eq!(*state.snapshot(), *fresh);
    }

    #[tokio::test]
    async fn test_refresh_with_unreachable_endpoint_keeps_empty_catalog() {
        let endpoint = Url::parse("http://127.0.0.1:9/api/products").unwrap();
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let state = CatalogState::new(CatalogClient::with_http_client(endpoint, http));

        assert!(state.refresh().await.is_empty());
    }

    #[tokio::test]
    async fn test_watch_refreshes_on_products_updated() {
        let upstream = Arc::new(Upstream::default());
        let state = CatalogState::new(serve(Arc::clone(&upstream)).await);
        let events = ProductEvents::new();
        let watcher = state.watch(&events);

        assert_eq!(events.publish(), 1);

        for _ in 0..100 {
            if !state.snapshot().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(state.snapshot().len(), 4);
        assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);

        watcher.abort();
    }

    async fn wait_for_hits(upstream: &Upstream, at_least: usize) {
        for _ in 0..200 {
            if upstream.hits.load(Ordering::SeqCst) >= at_least {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }

    #[tokio::test]
    async fn test_watch_survives_lagging_behind() {
        let upstream = Arc::new(Upstream::default());
        let state = CatalogState::new(serve(Arc::clone(&upstream)).await);
        let events = ProductEvents::new();
        let watcher = state.watch(&events);

        // Overflow the channel before the watcher gets to run
        let burst = events::DEFAULT_CAPACITY * 2 + 8;
        for _ in 0..burst {
            events.publish();
        }

        // One refresh for the lag, one per event still buffered
        let expected = events::DEFAULT_CAPACITY + 1;
        wait_for_hits(&upstream, expected).await;
        assert_eq!(upstream.hits.load(Ordering::SeqCst), expected);
        assert_eq!(state.snapshot().len(), 4);
        assert!(!watcher.is_finished());

        assert_eq!(events.publish(), 1);
        wait_for_hits(&upstream, expected + 1).await;
        assert_eq!(upstream.hits.load(Ordering::SeqCst), expected + 1);

        watcher.abort();
    }
}
