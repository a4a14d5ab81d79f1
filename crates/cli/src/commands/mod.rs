//! Subcommand implementations.
//!
//! Every command takes the storefront's [`AppState`] so it reads and writes
//! the same local storage file and catalog endpoint as the web UI.
//!
//! [`AppState`]: buildmart_storefront::state::AppState

use buildmart_core::ProductId;
use buildmart_storefront::storage::StorageError;
use buildmart_storefront::stores::{CartError, SessionError};
use thiserror::Error;

pub mod cart;
pub mod catalog;
pub mod profile;
pub mod session;
pub mod theme;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Local storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Session could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Cart could not be read or written.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Product id not present in the catalog.
    #[error("Product {0} not found in catalog")]
    ProductNotFound(ProductId),
}
