//! Shopwire storefront client library.
//!
//! A thin typed client for the Shopwire storefront backend: product
//! browsing, cart, checkout, and order history over a JSON HTTP API, with a
//! pluggable identity context and screen-guard evaluation.
//!
//! # Architecture
//!
//! - [`config`] - environment-driven configuration (base URL, platform
//!   loopback handling, optional auth provider section)
//! - [`http`] - the request wrapper every resource call goes through
//! - [`api`] - typed façades per backend resource (products, cart, orders)
//! - [`identity`] - the single process-wide identity cell, in two
//!   deployment variants behind one trait
//! - [`routes`] - the route table and identity-guard evaluation
//! - [`checkout`] - client-side validation before order submission
//! - [`fetch`] - cancellation and supersession for in-flight fetches
//!
//! The API layer performs no authorization: identity travels as a
//! client-asserted `x-user-id` header, and callers are responsible for
//! evaluating guards before issuing requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopwire_client::api::ProductsApi;
//! use shopwire_client::config::ClientConfig;
//! use shopwire_client::http::ApiClient;
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config);
//! let products = ProductsApi::new(&client).list(None).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod identity;
pub mod routes;

pub use error::{ApiError, Result};
