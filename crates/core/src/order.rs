//! Order and shipping address types.
//!
//! Orders are created via checkout and immutable from the client's view
//! afterwards, except for `status` which only the server transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, Price, ProductId, UserId};

/// Errors from shipping address validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// A required field is empty or whitespace-only.
    #[error("address field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// A shipping address.
///
/// All five fields must be non-empty for a valid checkout submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    /// Validate that every field is non-empty.
    ///
    /// Whitespace-only values count as empty.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::EmptyField` naming the first offending field.
    pub fn validate(&self) -> Result<(), AddressError> {
        let fields = [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("country", &self.country),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AddressError::EmptyField(name));
            }
        }
        Ok(())
    }
}

/// A single line in an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Number of units ordered.
    pub quantity: u32,
    /// Unit price captured at checkout.
    pub price: Price,
    /// Product name captured at checkout, so order history survives catalog edits.
    pub name: String,
}

impl OrderItem {
    /// Display subtotal for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Order lines.
    pub items: Vec<OrderItem>,
    /// Server-computed order total.
    pub total: Price,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Shipping destination.
    pub shipping_address: Address,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_address() -> Address {
        Address {
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            country: "US".into(),
        }
    }

    #[test]
    fn test_validate_complete_address() {
        assert!(full_address().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_empty_field() {
        let cases: [(&str, fn(&mut Address)); 5] = [
            ("street", |a| a.street.clear()),
            ("city", |a| a.city.clear()),
            ("state", |a| a.state.clear()),
            ("zipCode", |a| a.zip_code.clear()),
            ("country", |a| a.country.clear()),
        ];
        for (field, blank) in cases {
            let mut address = full_address();
            blank(&mut address);
            assert_eq!(address.validate(), Err(AddressError::EmptyField(field)));
        }
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        let mut address = full_address();
        address.city = "   ".into();
        assert_eq!(address.validate(), Err(AddressError::EmptyField("city")));
    }

    #[test]
    fn test_order_deserializes_from_wire() {
        let json = serde_json::json!({
            "id": "ord-9",
            "userId": "u-1",
            "items": [
                { "productId": "p1", "quantity": 1, "price": "19.99", "name": "Mug" },
            ],
            "total": "19.99",
            "status": "processing",
            "shippingAddress": {
                "street": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zipCode": "62701",
                "country": "US",
            },
            "createdAt": "2026-02-10T12:00:00Z",
            "updatedAt": "2026-02-11T09:30:00Z",
        });

        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items.first().unwrap().name, "Mug");
        assert!(order.updated_at > order.created_at);
    }
}
