//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the storefront's single currency unit.
///
/// Serialized as a plain JSON number so catalog payloads and persisted carts
/// stay interchangeable with the listing endpoint's format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a whole number of minor units (cents).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_cents(1000).to_string(), "$10.00");
        assert_eq!(Price::from_cents(1999).to_string(), "$19.99");
    }

    #[test]
    fn test_deserialize_json_number() {
        let price: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(price, Price::from_cents(1250));

        let price: Price = serde_json::from_str("10").unwrap();
        assert_eq!(price, Price::from_cents(1000));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&Price::from_cents(250)).unwrap();
        assert_eq!(json, "2.5");
    }

    #[test]
    fn test_sum() {
        let prices = [Price::from_cents(100), Price::from_cents(250)];
        assert_eq!(prices.iter().sum::<Price>(), Price::from_cents(350));
        assert_eq!(Vec::<Price>::new().into_iter().sum::<Price>(), Price::ZERO);
    }
}
