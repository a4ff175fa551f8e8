//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be greater than zero")]
    NotPositive,
}

/// A strictly positive unit price.
///
/// Amounts are decimal to avoid binary floating point drift when totals are
/// computed as `price * quantity`. Serialized as a bare number, matching the
/// catalog documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if the amount is zero or negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// `price * quantity`, the line contribution to an order total.
    #[must_use]
    pub fn extend(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_and_negative() {
        assert!(Price::new(Decimal::ZERO).is_err());
        assert!(Price::new(Decimal::from(-3)).is_err());
        assert!(Price::new(Decimal::from(1)).is_ok());
    }

    #[test]
    fn test_extend() {
        let price = Price::new(Decimal::from(50)).unwrap();
        assert_eq!(price.extend(2), Decimal::from(100));
    }

    #[test]
    fn test_serde_as_number() {
        let price = Price::new(Decimal::from(50)).unwrap();
        let json = serde_json::to_value(&price).unwrap();
        assert!(json.is_number());
    }
}
