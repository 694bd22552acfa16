//! Type-safe price representation using decimal arithmetic.
//!
//! Prices carry 2-place currency semantics and travel on the wire as
//! decimal strings to preserve precision (bare JSON numbers are also
//! accepted on input). Floats are never used for money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the currency's standard unit (e.g. dollars, not cents).
///
/// The client only ever computes display subtotals from prices; authoritative
/// cart and order totals are server-owned and arrive alongside the line data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from whole major units (e.g. `19` dollars).
    #[must_use]
    pub fn from_major_units(units: i64) -> Self {
        Self(Decimal::new(units, 0))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Line subtotal for a quantity of this price, for display purposes.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
