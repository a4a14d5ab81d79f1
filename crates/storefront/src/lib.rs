//! BuildMart Storefront library.
//!
//! This crate provides the storefront functionality as a library, allowing
//! it to be tested and reused by the `buildmart-storefront` server and the
//! `bm-cli` tool.
//!
//! # Modules
//!
//! - [`storage`] - Persisted key-value storage (file or memory)
//! - [`stores`] - Session, cart and theme stores over that storage
//! - [`catalog`] - Product listing client, category partition, `productsUpdated` events
//! - [`views`] - Dashboard and profile view models
//! - [`routes`], [`middleware`] - Server-rendered web UI

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod storage;
pub mod stores;
pub mod views;
