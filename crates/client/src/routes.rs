//! Route table and identity-guard evaluation.
//!
//! Screens requiring identity never issue a data request while the guard
//! blocks; the API layer performs no authorization of its own. The guard
//! is evaluated by the navigation glue before any fetch.

use shopwire_core::{OrderId, ProductId};

use crate::identity::{Identity, IdentityProvider, Remediation};

/// The fixed route table, with typed params on parameterized routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ProductList,
    ProductDetail { product_id: ProductId },
    Cart,
    Orders,
    OrderDetail { order_id: OrderId },
    Checkout,
    Settings,
    Login,
    SignUp,
}

impl Route {
    /// Whether this screen requires an identity before fetching data.
    #[must_use]
    pub const fn requires_identity(&self) -> bool {
        matches!(self, Self::Cart | Self::Orders | Self::Checkout)
    }
}

/// Result of evaluating a route's guard against the identity context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Identity-gated route with an identity present; proceed with it.
    Allow(Identity),
    /// Route needs no identity.
    AllowAnonymous,
    /// Identity required but absent: render the blocking state offering
    /// this remediation instead of fetching.
    Blocked(Remediation),
}

impl GuardOutcome {
    /// Whether the screen may issue its data request.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        !matches!(self, Self::Blocked(_))
    }
}

/// Evaluate a route's guard against the current identity snapshot.
#[must_use]
pub fn guard(route: &Route, provider: &impl IdentityProvider) -> GuardOutcome {
    if !route.requires_identity() {
        return GuardOutcome::AllowAnonymous;
    }
    match provider.current() {
        Some(identity) => GuardOutcome::Allow(identity),
        None => GuardOutcome::Blocked(provider.remediation()),
    }
}
