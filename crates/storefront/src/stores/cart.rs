//! Cart store.
//!
//! The cart is an ordered list of full product records. Adding the same
//! product twice stores it twice; there is no quantity and no removal.
//! The cart is not tied to the session that filled it.

use std::sync::Arc;

use buildmart_core::{Price, Product, ProductId};
use thiserror::Error;
use tracing::instrument;

use crate::storage::{LocalStore, StorageError, keys};

/// Errors raised by [`CartStore`].
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Encoding the cart failed.
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Persisted cart, loaded once per view.
pub struct CartStore {
    storage: Arc<dyn LocalStore>,
    items: Vec<Product>,
    count: usize,
}

impl CartStore {
    /// Load the persisted cart.
    ///
    /// A missing or malformed cart loads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error only if storage itself cannot be read.
    #[instrument(skip(storage))]
    pub fn load(storage: Arc<dyn LocalStore>) -> Result<Self, CartError> {
        let items = match storage.get(keys::CART)? {
            None => Vec::new(),
            Some(raw) => serde_json::from_str::<Vec<Product>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Persisted cart is malformed, starting empty");
                Vec::new()
            }),
        };

        let count = items.len();
        Ok(Self {
            storage,
            items,
            count,
        })
    }

    /// Append `product` and persist the whole cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted. The in-memory cart
    /// is left unchanged in that case.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&mut self, product: Product) -> Result<(), CartError> {
        self.items.push(product);
        if let Err(e) = self.persist() {
            self.items.pop();
            return Err(e);
        }
        self.count += 1;
        tracing::info!(items = self.items.len(), "Added product to cart");
        Ok(())
    }

    /// Whether a product with `id` is in the cart at least once.
    #[must_use]
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Cart entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Badge counter shown next to the cart link.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Sum of all entry prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(|p| p.price).sum()
    }

    fn persist(&self) -> Result<(), CartError> {
        let raw = serde_json::to_string(&self.items).map_err(CartError::Encode)?;
        self.storage.set(keys::CART, &raw)?;
        Ok(())
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items.len())
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use buildmart_core::Category;

    fn product(id: i64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(cents),
            image: String::new(),
            description: String::new(),
            category: Category::Material,
        }
    }

    #[test]
    fn test_empty_when_nothing_persisted() {
        let cart = CartStore::load(Arc::new(MemoryStore::new())).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_add_counts_duplicates() {
        let mut cart = CartStore::load(Arc::new(MemoryStore::new())).unwrap();
        for _ in 0..3 {
            cart.add(product(1, 100)).unwrap();
        }
        cart.add(product(2, 250)).unwrap();

        assert_eq!(cart.len(), 4);
        assert_eq!(cart.count(), 4);
        assert_eq!(cart.total(), Price::from_cents(550));
    }

    #[test]
    fn test_is_in_cart() {
        let mut cart = CartStore::load(Arc::new(MemoryStore::new())).unwrap();
        assert!(!cart.is_in_cart(ProductId::new(1)));

        cart.add(product(1, 100)).unwrap();
        assert!(cart.is_in_cart(ProductId::new(1)));
        assert!(!cart.is_in_cart(ProductId::new(2)));
    }

    #[test]
    fn test_add_persists_full_sequence() {
        let storage: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        let mut cart = CartStore::load(Arc::clone(&storage)).unwrap();
        cart.add(product(1, 100)).unwrap();
        cart.add(product(1, 100)).unwrap();

        let reloaded = CartStore::load(storage).unwrap();
        assert_eq!(reloaded.items(), cart.items());
        assert_eq!(reloaded.count(), 2);
    }

    #[test]
    fn test_malformed_cart_resets_to_empty() {
        let storage: Arc<dyn LocalStore> = Arc::new(MemoryStore::new());
        storage.set(keys::CART, "[{\"id\":").unwrap();

        let mut cart = CartStore::load(Arc::clone(&storage)).unwrap();
        assert!(cart.is_empty());

        cart.add(product(5, 100)).unwrap();
        let reloaded = CartStore::load(storage).unwrap();
        assert_eq!(reloaded.len(), 1);
    }
}
