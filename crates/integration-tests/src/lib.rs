//! Shared helpers for Mapleshop integration tests.
//!
//! The actual tests live in `tests/`; this crate only provides fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use mapleshop_cart::{InMemoryCatalog, ShopStore};
use mapleshop_core::ProductId;

/// A fresh session over the built-in seed catalog.
#[must_use]
pub fn seeded_store() -> ShopStore<InMemoryCatalog> {
    ShopStore::new(Arc::new(InMemoryCatalog::seed()))
}

/// Shorthand for building product ids in tests.
#[must_use]
pub const fn pid(id: i64) -> ProductId {
    ProductId::new(id)
}
