//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Entry page (login form)
//! POST /login                  - Create session, go to dashboard
//! POST /logout                 - Clear session, go to entry page
//!
//! # Dashboard (requires session)
//! GET  /dashboard              - Tabs, search and product dialog
//!                                ?tab=<category>&q=<term>&product=<id>
//!
//! # Cart (requires session)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Append product, reopen its dialog
//!
//! # Profile (requires session)
//! GET  /profile                - Profile form
//! POST /profile                - Update session fields
//!
//! # Preferences
//! POST /theme/toggle           - Flip dark mode
//!
//! # API
//! POST /api/products/updated   - Publish productsUpdated (catalog refresh)
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod profile;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};
use buildmart_core::User;

use crate::state::AppState;

/// Navigation targets.
///
/// Orders and complaints are served elsewhere; the storefront only links
/// to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Entry,
    Dashboard,
    Cart,
    Profile,
    Orders,
    Complaints,
}

impl Page {
    /// Path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Entry => "/",
            Self::Dashboard => "/dashboard",
            Self::Cart => "/cart",
            Self::Profile => "/profile",
            Self::Orders => "/orders",
            Self::Complaints => "/complaints",
        }
    }
}

/// Data shared by every page's chrome (header, theme).
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub dark_mode: bool,
    pub logged_in: bool,
    pub username: String,
    pub cart_count: usize,
    /// Where the theme toggle returns to.
    pub return_to: String,
}

impl Layout {
    /// Chrome for a logged-in page.
    #[must_use]
    pub fn for_user(user: &User, cart_count: usize, dark_mode: bool, return_to: String) -> Self {
        Self {
            dark_mode,
            logged_in: true,
            username: user.username.clone(),
            cart_count,
            return_to,
        }
    }

    /// Chrome for a page shown without a session.
    #[must_use]
    pub fn anonymous(dark_mode: bool, return_to: String) -> Self {
        Self {
            dark_mode,
            return_to,
            ..Self::default()
        }
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
}

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/products/updated", post(api::products_updated))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Entry page and session
        .route("/", get(auth::entry))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        // Dashboard
        .route("/dashboard", get(dashboard::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Profile
        .route("/profile", get(profile::show).post(profile::update))
        // Preferences
        .route("/theme/toggle", post(theme::toggle))
        // API
        .nest("/api", api_routes())
}
