//! Cart operations.
//!
//! The backend reports "no cart yet" as `{"cart": null}` with a success
//! status; that is a valid state, not an error. A mutation that succeeds at
//! the transport level but returns no cart violates the contract and
//! surfaces as [`ApiError::MissingPayload`].

use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopwire_core::{Cart, ProductId};

use crate::error::{ApiError, Result};
use crate::http::ApiClient;
use crate::identity::Identity;

#[derive(Deserialize)]
struct CartEnvelope {
    cart: Option<Cart>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartBody<'a> {
    product_id: &'a ProductId,
    quantity: u32,
}

/// Cart façade. Every operation is identity-scoped.
pub struct CartApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CartApi<'a> {
    /// Create a cart façade over the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the user's cart. `None` means no cart exists yet.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ApiError`] from the request; the no-cart case is
    /// `Ok(None)`, never an error.
    #[instrument(skip(self, identity))]
    pub async fn get(&self, identity: &Identity) -> Result<Option<Cart>> {
        let envelope: CartEnvelope = self.client.get("/api/cart", Some(identity)).await?;
        Ok(envelope.cart)
    }

    /// Add a quantity of a product, returning the updated cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingPayload("cart")` when the server accepts
    /// the mutation but the response carries no cart; other failures
    /// propagate as-is.
    #[instrument(skip(self, identity), fields(product_id = %product_id, quantity))]
    pub async fn add(
        &self,
        identity: &Identity,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Cart> {
        let body = AddToCartBody {
            product_id,
            quantity,
        };
        let envelope: CartEnvelope = self
            .client
            .post("/api/cart", &body, Some(identity))
            .await?;
        envelope.cart.ok_or(ApiError::MissingPayload("cart"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::{ClientConfig, Platform};
    use crate::http::USER_ID_HEADER;
    use shopwire_core::UserId;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::new(server.base_url(), Platform::Host, None))
    }

    fn identity() -> Identity {
        Identity::new(UserId::new("user-1"), None)
    }

    #[tokio::test]
    async fn test_get_returns_none_for_null_cart() {
        let server = MockServer::start();
        let mock = server
            .mock(|when, then| {
                when.method(GET)
                    .path("/api/cart")
                    .header(USER_ID_HEADER, "user-1");
                then.status(200).json_body(json!({"cart": null}));
            });

        let client = client_for(&server);
        let cart = CartApi::new(&client).get(&identity()).await.unwrap();

        mock.assert();
        assert!(cart.is_none());
    }

    #[tokio::test]
    async fn test_get_returns_populated_cart() {
        let server = MockServer::start();
        server
            .mock(|when, then| {
                when.method(GET).path("/api/cart");
                then.status(200).json_body(json!({
                    "cart": {
                        "items": [{"productId": "p1", "quantity": 2, "price": "5.00"}],
                        "total": "10.00",
                    }
                }));
            });

        let client = client_for(&server);
        let cart = CartApi::new(&client).get(&identity()).await.unwrap().unwrap();
        assert_eq!(cart.items.len(), 1);
    }

    #[tokio::test]
    async fn test_add_sends_body_and_returns_cart() {
        let server = MockServer::start();
        let mock = server
            .mock(|when, then| {
                when.method(POST)
                    .path("/api/cart")
                    .header(USER_ID_HEADER, "user-1")
                    .json_body(json!({"productId": "p1", "quantity": 3}));
                then.status(200).json_body(json!({
                    "cart": {
                        "items": [{"productId": "p1", "quantity": 3, "price": "5.00"}],
                        "total": "15.00",
                    }
                }));
            });

        let client = client_for(&server);
        let cart = CartApi::new(&client)
            .add(&identity(), &ProductId::new("p1"), 3)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(cart.items.first().unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_add_without_cart_payload_is_domain_error() {
        let server = MockServer::start();
        server
            .mock(|when, then| {
                when.method(POST).path("/api/cart");
                // Transport-level success, contract-level violation.
                then.status(200).json_body(json!({"cart": null}));
            });

        let client = client_for(&server);
        let err = CartApi::new(&client)
            .add(&identity(), &ProductId::new("p1"), 1)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingPayload("cart")));
    }

    #[tokio::test]
    async fn test_add_failure_propagates_server_message() {
        let server = MockServer::start();
        server
            .mock(|when, then| {
                when.method(POST).path("/api/cart");
                then.status(409).json_body(json!({"error": "insufficient stock"}));
            });

        let client = client_for(&server);
        let err = CartApi::new(&client)
            .add(&identity(), &ProductId::new("p1"), 99)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "insufficient stock");
    }
}
