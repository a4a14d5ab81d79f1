//! Cart route handlers.
//!
//! The cart lives in local storage, not in the catalog service. Adding
//! appends a full product record taken from the current catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use buildmart_core::{Category, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireSession;
use crate::routes::{Layout, Page};
use crate::state::AppState;
use crate::views::{ProductCard, dashboard_href};

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    /// Dashboard search term to return to.
    #[serde(default)]
    pub q: String,
    /// Dashboard tab to return to.
    #[serde(default)]
    pub tab: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub layout: Layout,
    pub items: Vec<ProductCard>,
    pub count: usize,
    pub total: String,
}

/// Display cart page.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn show(
    State(state): State<AppState>,
    RequireSession(user): RequireSession,
) -> Result<CartTemplate> {
    let cart = state.load_cart()?;
    let dark_mode = state.theme().is_dark_mode()?;

    Ok(CartTemplate {
        layout: Layout::for_user(&user, cart.count(), dark_mode, Page::Cart.path().to_string()),
        items: cart
            .items()
            .iter()
            .map(|p| ProductCard::new(p, ""))
            .collect(),
        count: cart.len(),
        total: cart.total().to_string(),
    })
}

/// Append a product and reopen its dialog on the dashboard.
#[instrument(skip_all, fields(user_id = %user.id, product_id = %form.product_id))]
pub async fn add(
    State(state): State<AppState>,
    RequireSession(user): RequireSession,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let id: ProductId = form
        .product_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid product id: {}", form.product_id)))?;

    let mut catalog = state.catalog().snapshot();
    if catalog.find(id).is_none() {
        catalog = state.catalog().refresh().await;
    }
    let product = catalog
        .find(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let mut cart = state.load_cart()?;
    cart.add(product)?;
    let product_id = id.to_string();
    add_breadcrumb(
        "cart",
        "Added product to cart",
        Some(&[("product_id", product_id.as_str())]),
    );

    let tab = form.tab.parse::<Category>().unwrap_or_default();
    Ok(Redirect::to(&dashboard_href(tab, form.q.trim(), Some(id))))
}
