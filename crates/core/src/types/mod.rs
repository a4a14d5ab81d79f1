//! Core types for BuildMart.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts and the two records that cross every boundary: [`User`] and
//! [`Product`].

pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod role;
pub mod user;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::Price;
pub use product::Product;
pub use role::Role;
pub use user::User;
