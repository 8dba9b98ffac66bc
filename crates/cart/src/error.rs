//! Unified error type for cart operations.
//!
//! All variants are local, synchronous, and recoverable - none are fatal to
//! the process. Operations that reference a missing product surface
//! [`CartError::NotFound`] to the caller rather than silently pricing the
//! line at zero.

use mapleshop_core::ProductId;
use thiserror::Error;

use crate::payment::PaymentError;

/// Errors produced by the cart engine and checkout flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A cart entry refers to a product the catalog no longer resolves.
    ///
    /// In normal operation this never reaches the user, since entries are
    /// only added from a valid catalog listing; its occurrence indicates a
    /// stale cart. See [`crate::store::ShopStore::prune_unavailable`].
    #[error("product {0} is no longer available")]
    NotFound(ProductId),

    /// A quantity mutation was rejected without mutating.
    #[error("invalid quantity {quantity} for product {id}")]
    InvalidQuantity {
        /// The product whose line was targeted.
        id: ProductId,
        /// The quantity the mutation would have produced.
        quantity: u32,
    },

    /// A checkout form field failed validation.
    #[error(transparent)]
    Validation(#[from] PaymentError),
}

/// Result type alias for [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;
