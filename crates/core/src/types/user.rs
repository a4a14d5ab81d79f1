//! The session user record.

use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// Identity of the current storefront session.
///
/// Email and username are free-form: sessions are created from whatever the
/// visitor typed, without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier.
    pub id: UserId,
    /// Email as entered.
    pub email: String,
    /// Display name as entered.
    pub username: String,
    /// Always [`Role::Consumer`].
    pub role: Role,
}

impl User {
    /// Create a consumer with a freshly generated id.
    #[must_use]
    pub fn consumer(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
            username: username.into(),
            role: Role::Consumer,
        }
    }
}
