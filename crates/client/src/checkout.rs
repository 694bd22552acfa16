//! Checkout submission with client-side validation.
//!
//! Validation failures here are caught before any request is issued; the
//! network is touched only once identity is present and every address
//! field is non-empty.

use thiserror::Error;
use tracing::instrument;

use shopwire_core::{Address, AddressError, Order};

use crate::api::OrdersApi;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::identity::IdentityProvider;

/// Errors from a checkout attempt.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No identity present; the screen should render its guard state.
    #[error("sign in before checking out")]
    MissingIdentity,

    /// The shipping address is incomplete.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The order request itself failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Shipping details collected by the checkout screen.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub shipping_address: Address,
}

impl CheckoutForm {
    /// Whether submission would pass address validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shipping_address.validate().is_ok()
    }
}

/// Submit a checkout: validate, then create the order.
///
/// # Errors
///
/// Returns `CheckoutError::MissingIdentity` or `CheckoutError::Address`
/// without issuing any request; `CheckoutError::Api` wraps a failure of
/// the order creation itself. No retry is attempted; every failure is
/// terminal for this attempt.
#[instrument(skip_all)]
pub async fn submit(
    client: &ApiClient,
    provider: &impl IdentityProvider,
    form: &CheckoutForm,
) -> Result<Order, CheckoutError> {
    let identity = provider.current().ok_or(CheckoutError::MissingIdentity)?;
    form.shipping_address.validate()?;

    let order = OrdersApi::new(client)
        .create(&identity, &form.shipping_address)
        .await?;
    Ok(order)
}
