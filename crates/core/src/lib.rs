//! BuildMart Core - Shared domain types.
//!
//! This crate provides the types shared by every BuildMart component:
//! - `storefront` - Consumer storefront (web UI and local state stores)
//! - `cli` - Command-line access to the same stores and catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Ids, prices, categories, roles and the `User`/`Product` records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
