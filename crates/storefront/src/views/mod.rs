//! View models for the storefront pages.
//!
//! These types hold everything a page shows, already derived from the
//! catalog, cart and session. They know nothing about HTTP or templates, so
//! the web routes and the CLI share them.

pub mod dashboard;
pub mod profile;

pub use dashboard::{
    DashboardQuery, DashboardState, DashboardView, DialogAction, ProductCard, ProductDialog,
    TabView, dashboard_href, filter_products,
};
pub use profile::ProfileForm;
