//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are decimal values, never floats: catalog math multiplies and
//! sums them, and binary floating point would drift on amounts like 0.1.
//! On the wire a price is still a JSON number (`9.99`), which is what the
//! `serde-with-float` conversion handles at the serialization boundary
//! only — arithmetic stays exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative monetary amount in the currency's standard unit.
///
/// Constructed through [`Price::new`], which rejects negative amounts, or
/// [`Price::from_cents`] for literal amounts known at catalog-load time.
///
/// ## Examples
///
/// ```
/// use kiosk_core::Price;
///
/// let price = Price::from_cents(999); // 9.99
/// assert_eq!(price.to_string(), "9.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
