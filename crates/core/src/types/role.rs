//! User roles.

use serde::{Deserialize, Serialize};

/// Role carried by a storefront session.
///
/// The storefront only ever creates consumer sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Consumer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consumer => write!(f, "consumer"),
        }
    }
}
