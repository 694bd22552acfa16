//! Shopwire Core - Shared types library.
//!
//! This crate provides the domain types used across the Shopwire client:
//! products, carts, orders, addresses, and the newtype wrappers for IDs,
//! emails, prices, and statuses.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. All wire
//! formats (serde names, decimal encoding) are defined here so the client
//! crate never re-states them.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`catalog`] - Product types
//! - [`cart`] - Cart and cart line types
//! - [`order`] - Order, order line, and shipping address types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::Product;
pub use order::{Address, AddressError, Order, OrderItem};
pub use types::*;
