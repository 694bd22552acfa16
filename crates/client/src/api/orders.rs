//! Order operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use shopwire_core::{Address, Order, OrderId};

use crate::error::Result;
use crate::http::ApiClient;
use crate::identity::Identity;

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderBody<'a> {
    shipping_address: &'a Address,
}

/// Orders façade.
pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersApi<'a> {
    /// Create an orders façade over the shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List the user's orders.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ApiError`] from the request.
    #[instrument(skip(self, identity))]
    pub async fn list(&self, identity: &Identity) -> Result<Vec<Order>> {
        let envelope: OrdersEnvelope = self.client.get("/api/orders", Some(identity)).await?;
        Ok(envelope.orders)
    }

    /// Fetch a single order by id.
    ///
    /// Order lookup is not identity-scoped at this layer; no identity
    /// header is sent, and the backend owns any scoping decision.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ApiError`]; an unknown id surfaces as the
    /// server's 404.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get(&self, id: &OrderId) -> Result<Order> {
        let envelope: OrderEnvelope = self.client.get(&format!("/api/orders/{id}"), None).await?;
        Ok(envelope.order)
    }

    /// Submit a checkout, creating an order from the user's cart.
    ///
    /// Callers validate the address and identity before calling; see
    /// [`crate::checkout::submit`].
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ApiError`] from the request.
    #[instrument(skip(self, identity, shipping_address))]
    pub async fn create(&self, identity: &Identity, shipping_address: &Address) -> Result<Order> {
        let body = CreateOrderBody { shipping_address };
        let envelope: OrderEnvelope = self
            .client
            .post("/api/orders", &body, Some(identity))
            .await?;
        Ok(envelope.order)
    }
}
