//! Product categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// The category a product is listed under.
///
/// The dashboard renders one tab per variant, in [`Category::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Building materials.
    #[default]
    Material,
    /// Machines and equipment.
    Machine,
    /// Workers offering labour.
    Worker,
}

impl Category {
    /// Every category, in tab order.
    pub const ALL: [Self; 3] = [Self::Material, Self::Machine, Self::Worker];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Machine => "machine",
            Self::Worker => "worker",
        }
    }

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Material => "Materials",
            Self::Machine => "Machines",
            Self::Worker => "Workers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" => Ok(Self::Material),
            "machine" => Ok(Self::Machine),
            "worker" => Ok(Self::Worker),
            _ => Err(CategoryError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("material".parse::<Category>().unwrap(), Category::Material);
        assert_eq!(" Machine ".parse::<Category>().unwrap(), Category::Machine);
        assert_eq!("WORKER".parse::<Category>().unwrap(), Category::Worker);
        assert_eq!(
            "tools".parse::<Category>(),
            Err(CategoryError("tools".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
        assert!(serde_json::from_str::<Category>("\"Material\"").is_err());
    }

    #[test]
    fn test_default_is_first_tab() {
        assert_eq!(Category::default(), Category::ALL[0]);
    }
}
