//! Typed stores over [`LocalStore`](crate::storage::LocalStore).
//!
//! Each store owns one persisted key and exposes the operations the views
//! need. Stores are cheap to construct; views build them per render so that
//! every render starts from persisted state.

pub mod cart;
pub mod session;
pub mod theme;

pub use cart::{CartError, CartStore};
pub use session::{IdentityPolicy, SessionError, SessionFields, SessionStore};
pub use theme::ThemeStore;
