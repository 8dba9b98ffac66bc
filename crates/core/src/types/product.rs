//! Product and cart line records.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::Money;

/// A catalog product.
///
/// Immutable once loaded from the catalog store; the cart only ever refers
/// to products by [`ProductId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Category label (e.g., "Apparel").
    pub category: String,
    /// Image asset reference.
    pub image: String,
    /// Longer description text.
    pub description: String,
}

/// A (product, quantity) pair, materialized only while the product is in
/// the cart.
///
/// Invariant: quantity is always at least 1. A line is removed as a whole;
/// decrementing never drops it below a quantity of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// How many units are in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with the default quantity of 1.
    #[must_use]
    pub const fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_line_defaults_to_one() {
        let line = CartLine::new(ProductId::new(1));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_product_serde_roundtrip() {
        let product = Product {
            id: ProductId::new(1),
            title: "Pants".to_owned(),
            price: Money::from_cents(8200),
            category: "Apparel".to_owned(),
            image: "hm1".to_owned(),
            description: "Stylish Pants".to_owned(),
        };
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
