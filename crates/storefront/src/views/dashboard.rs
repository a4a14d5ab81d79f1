//! Dashboard view: category tabs, search and the product dialog.
//!
//! View state (search term, active tab, selected product) travels in the
//! query string, so every link on the page is a plain `GET` of the
//! dashboard with different parameters.

use buildmart_core::{Category, Product, ProductId};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::stores::CartStore;

/// Products in `products` whose name contains `term`, ignoring case.
///
/// An empty term keeps every product. The term is matched as given;
/// callers trim user input before it gets here.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.name_matches(term)).collect()
}

/// Link to the dashboard with the given view state.
#[must_use]
pub fn dashboard_href(tab: Category, search: &str, product: Option<ProductId>) -> String {
    let mut href = format!("/dashboard?tab={tab}");
    if !search.is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(search));
    }
    if let Some(id) = product {
        href.push_str(&format!("&product={id}"));
    }
    href
}

/// Raw dashboard query parameters.
///
/// Parsed leniently: unknown tabs and unparsable product ids are ignored
/// rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub q: String,
    pub tab: Option<String>,
    pub product: Option<String>,
}

/// Dashboard view state.
///
/// Built from the query string; the search term is trimmed here and
/// nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub search: String,
    pub tab: Category,
    pub selected: Option<ProductId>,
}

impl From<DashboardQuery> for DashboardState {
    fn from(query: DashboardQuery) -> Self {
        Self {
            search: query.q.trim().to_string(),
            tab: query
                .tab
                .and_then(|t| t.parse().ok())
                .unwrap_or_default(),
            selected: query.product.and_then(|p| p.parse().ok()),
        }
    }
}

/// What the product dialog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Product is not in the cart yet.
    AddToCart,
    /// Product is already in the cart.
    ViewCart,
}

impl DialogAction {
    /// Whether the dialog shows the add-to-cart button.
    #[must_use]
    pub const fn is_add_to_cart(&self) -> bool {
        matches!(self, Self::AddToCart)
    }
}

/// Product display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub category: Category,
    /// Dashboard link opening this product's dialog.
    pub href: String,
}

impl ProductCard {
    /// Card for `product`, linking back to the dashboard with `search` kept.
    #[must_use]
    pub fn new(product: &Product, search: &str) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            description: product.description.clone(),
            category: product.category,
            href: dashboard_href(product.category, search, Some(product.id)),
        }
    }
}

/// One category tab.
#[derive(Debug, Clone)]
pub struct TabView {
    pub category: Category,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
    pub products: Vec<ProductCard>,
}

/// The open product dialog.
#[derive(Debug, Clone)]
pub struct ProductDialog {
    pub product: ProductCard,
    pub action: DialogAction,
    /// Dashboard link with the dialog closed.
    pub close_href: String,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub search: String,
    pub active_tab: Category,
    pub tabs: Vec<TabView>,
    pub dialog: Option<ProductDialog>,
    pub cart_count: usize,
}

impl DashboardView {
    /// Derive the dashboard from the catalog, the cart and the view state.
    #[must_use]
    pub fn compose(catalog: &Catalog, cart: &CartStore, state: &DashboardState) -> Self {
        let tabs = Category::ALL
            .into_iter()
            .map(|category| TabView {
                category,
                label: category.label(),
                href: dashboard_href(category, &state.search, None),
                active: category == state.tab,
                products: filter_products(catalog.products(category), &state.search)
                    .into_iter()
                    .map(|p| ProductCard::new(p, &state.search))
                    .collect(),
            })
            .collect();

        let dialog = state
            .selected
            .and_then(|id| catalog.find(id))
            .map(|product| ProductDialog {
                product: ProductCard::new(product, &state.search),
                action: if cart.is_in_cart(product.id) {
                    DialogAction::ViewCart
                } else {
                    DialogAction::AddToCart
                },
                close_href: dashboard_href(state.tab, &state.search, None),
            });

        Self {
            search: state.search.clone(),
            active_tab: state.tab,
            tabs,
            dialog,
            cart_count: cart.count(),
        }
    }

    /// The tab currently shown.
    #[must_use]
    pub fn active(&self) -> Option<&TabView> {
        self.tabs.iter().find(|t| t.active)
    }

    /// Dashboard link for the current view, dialog included.
    #[must_use]
    pub fn href(&self) -> String {
        dashboard_href(
            self.active_tab,
            &self.search,
            self.dialog.as_ref().map(|d| d.product.id),
        )
    }
}
