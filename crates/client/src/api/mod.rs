//! Typed façades over the storefront HTTP API, one per backend resource.
//!
//! Each façade borrows the shared [`crate::http::ApiClient`] and translates
//! one resource's operations into requests, unwrapping the backend's
//! single-key envelopes (`{"products": ...}`, `{"cart": ...}`, ...).
//! Failures propagate as [`crate::ApiError`] untranslated; screens own the
//! presentation.

pub mod cart;
pub mod orders;
pub mod products;

pub use cart::CartApi;
pub use orders::OrdersApi;
pub use products::{ProductFilters, ProductsApi};
