//! Mapleshop Core - Shared types library.
//!
//! This crate provides common types used across all Mapleshop components:
//! - `cart` - The cart/pricing engine
//! - `cli` - Command-line front end for the shop flow
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
