//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! bm-cli cart add 12
//! bm-cli cart show
//! ```

use buildmart_core::ProductId;
use buildmart_storefront::state::AppState;

use super::CommandError;
use super::catalog::format_line;

/// Fetch the catalog and append the product with `id` to the cart.
///
/// Adding a product that is already in the cart appends a second entry.
#[allow(clippy::print_stdout)]
pub async fn add(state: &AppState, id: ProductId) -> Result<(), CommandError> {
    let catalog = state.catalog().refresh().await;
    let product = catalog
        .find(id)
        .cloned()
        .ok_or(CommandError::ProductNotFound(id))?;

    let mut cart = state.load_cart()?;
    let name = product.name.clone();
    cart.add(product)?;

    println!("Added {name} to cart ({} items)", cart.count());
    Ok(())
}

/// Print the cart contents and total.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) -> Result<(), CommandError> {
    let cart = state.load_cart()?;
    if cart.is_empty() {
        println!("Cart is empty");
        return Ok(());
    }

    for product in cart.items() {
        println!("{}", format_line(product, false));
    }
    println!("{} items, total {}", cart.count(), cart.total());
    Ok(())
}
