//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::{Category, Price, ProductId};

/// A product as served by the catalog endpoint.
///
/// Products are read-only on the storefront side. The same JSON shape is
/// used for persisted cart entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
}

impl Product {
    /// Case-insensitive substring match against the product name.
    ///
    /// An empty term matches every product.
    #[must_use]
    pub fn name_matches(&self, term: &str) -> bool {
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
