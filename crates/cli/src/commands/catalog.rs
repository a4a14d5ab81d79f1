//! Catalog listing.
//!
//! # Usage
//!
//! ```bash
//! # Every category, grouped
//! bm-cli products
//!
//! # Workers whose name contains "weld"
//! bm-cli products -c worker -s weld
//! ```

use buildmart_core::{Category, Product};
use buildmart_storefront::state::AppState;
use buildmart_storefront::views::filter_products;

use super::CommandError;

/// Fetch the catalog and print it grouped by category.
///
/// A failed fetch is logged and prints empty groups.
#[allow(clippy::print_stdout)]
pub async fn list(
    state: &AppState,
    category: Option<Category>,
    search: &str,
) -> Result<(), CommandError> {
    let catalog = state.catalog().refresh().await;
    let cart = state.load_cart()?;

    let categories: &[Category] = match category {
        Some(ref c) => std::slice::from_ref(c),
        None => &Category::ALL,
    };

    for category in categories {
        let products = filter_products(catalog.products(*category), search);
        println!("{} ({})", category.label(), products.len());
        for product in products {
            println!("{}", format_line(product, cart.is_in_cart(product.id)));
        }
    }
    Ok(())
}

/// One listing line: id, name, price and an in-cart marker.
pub(crate) fn format_line(product: &Product, in_cart: bool) -> String {
    let marker = if in_cart { " [in cart]" } else { "" };
    let id = format!("#{}", product.id);
    format!(
        "  {id:<6} {:<32} {:>10}{marker}",
        product.name,
        product.price.to_string()
    )
}
