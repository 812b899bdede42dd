//! Prices read back from rendered cart pages.
//!
//! The cart shows line totals as free text (`"$598.00"`, `"1,196.00 USD"`).
//! [`Price::parse_display`] pulls the first amount out of such text so the
//! suite can compare totals with decimal arithmetic instead of floats.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// First numeric token: digits with optional thousands separators and decimals.
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("valid amount regex"));

/// Errors from parsing displayed price text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// The text contained no digits at all.
    #[error("no amount found in {0:?}")]
    NoAmount(String),
    /// The numeric token could not be represented as a decimal.
    #[error("invalid amount in {0:?}")]
    Invalid(String),
    /// A unit price was requested for zero items.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// An amount shown on a storefront page.
///
/// Currency is not tracked: every comparison the suite makes is between
/// cells of the same cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The wrapped amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Parse the first amount found in displayed text.
    ///
    /// Currency symbols, codes and surrounding words are ignored. Commas are
    /// treated as thousands separators.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NoAmount`] if the text has no digits, or
    /// [`PriceError::Invalid`] if the token does not fit a decimal.
    pub fn parse_display(text: &str) -> Result<Self, PriceError> {
        let token = AMOUNT_RE
            .find(text)
            .ok_or_else(|| PriceError::NoAmount(text.to_owned()))?;
        let normalized = token.as_str().replace(',', "");
        normalized
            .parse::<Decimal>()
            .map(Self)
            .map_err(|_| PriceError::Invalid(text.to_owned()))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-unit price of a cart line.
///
/// # Errors
///
/// Returns [`PriceError::ZeroQuantity`] when `quantity` is 0.
pub fn unit_price(line_total: Price, quantity: u32) -> Result<Decimal, PriceError> {
    if quantity == 0 {
        return Err(PriceError::ZeroQuantity);
    }
    Ok(line_total.amount() / Decimal::from(quantity))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_prefix() {
        let price = Price::parse_display("$598.00").unwrap();
        assert_eq!(price.amount(), Decimal::new(59800, 2));
    }

    #[test]
    fn test_parse_thousands_and_suffix() {
        let price = Price::parse_display("Total: 1,196.50 USD").unwrap();
        assert_eq!(price.amount(), Decimal::new(119_650, 2));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(
            Price::parse_display("897").unwrap().amount(),
            Decimal::from(897)
        );
    }

    #[test]
    fn test_parse_takes_first_amount() {
        let price = Price::parse_display("3 x $299.00").unwrap();
        assert_eq!(price.amount(), Decimal::from(3));
    }

    #[test]
    fn test_parse_no_digits() {
        assert_eq!(
            Price::parse_display("Free"),
            Err(PriceError::NoAmount("Free".to_string()))
        );
    }

    #[test]
    fn test_unit_price_invariant_after_removal() {
        let before = Price::parse_display("$897.00").unwrap();
        let after = Price::parse_display("$598.00").unwrap();
        assert_eq!(unit_price(before, 3).unwrap(), unit_price(after, 2).unwrap());
    }

    #[test]
    fn test_unit_price_detects_miscalculation() {
        let before = Price::parse_display("$897.00").unwrap();
        let after = Price::parse_display("$600.00").unwrap();
        assert_ne!(unit_price(before, 3).unwrap(), unit_price(after, 2).unwrap());
    }

    #[test]
    fn test_unit_price_zero_quantity() {
        let total = Price::new(Decimal::from(10));
        assert_eq!(unit_price(total, 0), Err(PriceError::ZeroQuantity));
    }
}
