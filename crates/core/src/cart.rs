//! Cart types.
//!
//! The authoritative cart `total` is computed server-side; the client only
//! derives per-line subtotals for display and never recomputes the total.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A single line in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Positive number of units.
    pub quantity: u32,
    /// Unit price at the time the line was added.
    pub price: Price,
}

impl CartItem {
    /// Display subtotal for this line (`price x quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.quantity)
    }
}

/// A user's cart, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart lines.
    pub items: Vec<CartItem>,
    /// Server-computed total across all lines.
    pub total: Price,
}

impl Cart {
    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
