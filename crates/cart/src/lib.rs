//! Mapleshop Cart - The cart/pricing engine.
//!
//! This crate is the in-process core behind the shop's screens: selection
//! sets for favorites and cart membership, per-product quantities, pricing
//! derivation (subtotal, 13% tax, total), checkout, and payment-form
//! validation.
//!
//! # Architecture
//!
//! - [`catalog`] - Read-only product source trait plus an in-memory adapter
//! - [`selection`] - Set-membership toggling shared by favorites and cart
//! - [`engine`] - Cart lines, quantity mutation, and pricing derivation
//! - [`payment`] - Stateless checkout form validation
//! - [`order`] - Order confirmation produced by a successful checkout
//! - [`store`] - The observable state container the UI layer subscribes to
//! - [`identity`] - Boolean "verified user" gate supplied by the host
//!
//! The engine never performs I/O. The catalog is consumed as an immutable
//! snapshot; mutations are synchronous and observers are notified inline.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod identity;
pub mod order;
pub mod payment;
pub mod selection;
pub mod store;

pub use catalog::{CatalogStore, InMemoryCatalog};
pub use engine::{CartEngine, PricingSnapshot, TAX_RATE};
pub use error::{CartError, Result};
pub use identity::{IdentityGate, StaticGate};
pub use order::OrderConfirmation;
pub use payment::{PaymentError, PaymentField};
pub use selection::SelectionSet;
pub use store::{ShopStore, StoreEvent};
