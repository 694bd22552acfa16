//! Product catalog types.
//!
//! Products are server-owned and immutable from the client's perspective.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Current unit price.
    pub price: Price,
    /// Category the product belongs to.
    pub category: String,
    /// Optional product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Units in stock (non-negative).
    pub stock: u32,
}

impl Product {
    /// Whether at least one unit can be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::json!({
            "id": "p1",
            "name": "Mug",
            "description": "A mug",
            "price": "12.50",
            "category": "kitchen",
            "imageUrl": "https://cdn.example.com/mug.png",
            "stock": 4,
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.image_url.as_deref(), Some("https://cdn.example.com/mug.png"));
        assert!(product.in_stock());
    }

    #[test]
    fn test_image_url_optional() {
        let json = serde_json::json!({
            "id": "p2",
            "name": "Spoon",
            "description": "A spoon",
            "price": "2.00",
            "category": "kitchen",
            "stock": 0,
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert!(product.image_url.is_none());
        assert!(!product.in_stock());
    }
}
