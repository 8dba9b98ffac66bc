//! Cart lines, quantity mutation, and pricing derivation.
//!
//! The engine exclusively owns the `inCart` set and its quantities. A
//! product is either absent or present with exactly one quantity of at
//! least 1. Pricing is derived on demand from the current lines and the
//! fixed tax rate; nothing derived is ever stored.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mapleshop_core::{CartLine, Money, ProductId};

use crate::catalog::CatalogStore;
use crate::error::{CartError, Result};

/// Fixed sales tax rate (13%).
///
/// Hard-coded by design of the source application; per-region configuration
/// is a known limitation, not an option of this engine.
pub const TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Derived subtotal/tax/total for the current cart state.
///
/// Amounts are exact; rounding happens only in [`Money::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    /// Sum of price x quantity over all lines.
    pub subtotal: Money,
    /// `subtotal * TAX_RATE`.
    pub tax: Money,
    /// `subtotal + tax`.
    pub total: Money,
}

impl PricingSnapshot {
    /// The snapshot of an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            subtotal: Money::ZERO,
            tax: Money::ZERO,
            total: Money::ZERO,
        }
    }
}

/// The cart: product ids mapped to their quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartEngine {
    lines: BTreeMap<ProductId, u32>,
}

impl CartEngine {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    /// Rebuild a cart from persisted lines.
    ///
    /// Quantities below 1 are floored to 1 to restore the line invariant;
    /// duplicate ids keep the last quantity seen.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let lines = lines
            .into_iter()
            .map(|line| (line.product_id, line.quantity.max(1)))
            .collect();
        Self { lines }
    }

    /// Insert `id` with quantity 1 if absent; an existing line's quantity is
    /// left unchanged.
    ///
    /// Returns `true` when the product was newly added.
    pub fn add(&mut self, id: ProductId) -> bool {
        let added = match self.lines.entry(id) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(1);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        };
        if added {
            debug!(%id, "added to cart");
        }
        added
    }

    /// Remove `id` and discard its quantity.
    ///
    /// Returns `true` when the product was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let removed = self.lines.remove(&id).is_some();
        if removed {
            debug!(%id, "removed from cart");
        }
        removed
    }

    /// Increase the quantity for `id` by one. No upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if `id` has no cart line.
    pub fn increment(&mut self, id: ProductId) -> Result<u32> {
        let quantity = self.lines.get_mut(&id).ok_or(CartError::NotFound(id))?;
        *quantity = quantity.saturating_add(1);
        debug!(%id, quantity = *quantity, "incremented quantity");
        Ok(*quantity)
    }

    /// Decrease the quantity for `id` by one, floored at 1.
    ///
    /// Never removes the line; removal is only via [`CartEngine::remove`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if `id` has no cart line, and
    /// [`CartError::InvalidQuantity`] (without mutating) if the quantity is
    /// already 1.
    pub fn decrement(&mut self, id: ProductId) -> Result<u32> {
        let quantity = self.lines.get_mut(&id).ok_or(CartError::NotFound(id))?;
        if *quantity <= 1 {
            return Err(CartError::InvalidQuantity { id, quantity: 0 });
        }
        *quantity -= 1;
        debug!(%id, quantity = *quantity, "decremented quantity");
        Ok(*quantity)
    }

    /// The quantity for `id`, if it has a cart line.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> Option<u32> {
        self.lines.get(&id).copied()
    }

    /// Whether `id` is in the cart.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Number of cart lines (not summed quantities).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total unit count across all lines (the cart badge number).
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.lines.values().sum()
    }

    /// The current lines in ascending id order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines
            .iter()
            .map(|(&product_id, &quantity)| CartLine {
                product_id,
                quantity,
            })
            .collect()
    }

    /// Ids currently in the cart, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.lines.keys().copied()
    }

    /// Sum of price x quantity over all lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] for the first cart id the catalog no
    /// longer resolves. A stale line is never silently priced at zero.
    pub fn subtotal<C: CatalogStore + ?Sized>(&self, catalog: &C) -> Result<Money> {
        let mut subtotal = Money::ZERO;
        for (&id, &quantity) in &self.lines {
            let product = catalog.get(id).ok_or(CartError::NotFound(id))?;
            subtotal += product.price * quantity;
        }
        Ok(subtotal)
    }

    /// Derive the current subtotal/tax/total.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] as for [`CartEngine::subtotal`].
    pub fn pricing<C: CatalogStore + ?Sized>(&self, catalog: &C) -> Result<PricingSnapshot> {
        let subtotal = self.subtotal(catalog)?;
        let tax = subtotal.scale_by(TAX_RATE);
        Ok(PricingSnapshot {
            subtotal,
            tax,
            total: subtotal + tax,
        })
    }

    /// Drop every line and quantity. The checkout reset.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    fn id(n: i64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_add_defaults_quantity_to_one() {
        let mut cart = CartEngine::new();
        assert!(cart.add(id(1)));
        assert_eq!(cart.quantity(id(1)), Some(1));
    }

    #[test]
    fn test_double_add_is_noop_on_quantity() {
        let mut cart = CartEngine::new();
        cart.add(id(1));
        cart.increment(id(1)).unwrap();
        assert!(!cart.add(id(1)));
        assert_eq!(cart.quantity(id(1)), Some(2));
    }

    #[test]
    fn test_remove_then_readd_resets_quantity() {
        let mut cart = CartEngine::new();
        cart.add(id(1));
        cart.increment(id(1)).unwrap();
        cart.increment(id(1)).unwrap();
        assert_eq!(cart.quantity(id(1)), Some(3));

        assert!(cart.remove(id(1)));
        assert!(cart.add(id(1)));
        assert_eq!(cart.quantity(id(1)), Some(1));
    }

    #[test]
    fn test_increment_has_no_upper_bound() {
        let mut cart = CartEngine::new();
        cart.add(id(1));
        for expected in 2..100 {
            assert_eq!(cart.increment(id(1)).unwrap(), expected);
        }
    }

    #[test]
    fn test_increment_saturates_instead_of_panicking() {
        let mut cart = CartEngine::from_lines([CartLine {
            product_id: id(1),
            quantity: u32::MAX,
        }]);
        assert_eq!(cart.increment(id(1)).unwrap(), u32::MAX);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = CartEngine::new();
        cart.add(id(1));
        cart.increment(id(1)).unwrap();

        assert_eq!(cart.decrement(id(1)).unwrap(), 1);
        assert_eq!(
            cart.decrement(id(1)),
            Err(CartError::InvalidQuantity {
                id: id(1),
                quantity: 0
            })
        );
        // The rejected decrement did not mutate or remove the line
        assert_eq!(cart.quantity(id(1)), Some(1));
    }

    #[test]
    fn test_mutations_on_missing_line() {
        let mut cart = CartEngine::new();
        assert_eq!(cart.increment(id(5)), Err(CartError::NotFound(id(5))));
        assert_eq!(cart.decrement(id(5)), Err(CartError::NotFound(id(5))));
        assert!(!cart.remove(id(5)));
    }

    #[test]
    fn test_pricing_fixture() {
        // {82.00 x 1} + {70.00 x 2} => subtotal 222.00, tax 28.86, total 250.86
        let catalog = InMemoryCatalog::seed();
        let mut cart = CartEngine::new();
        cart.add(id(1));
        cart.add(id(2));
        cart.increment(id(2)).unwrap();

        let pricing = cart.pricing(&catalog).unwrap();
        assert_eq!(pricing.subtotal.display(), "$222.00");
        assert_eq!(pricing.tax.display(), "$28.86");
        assert_eq!(pricing.total.display(), "$250.86");
        assert_eq!(pricing.total, pricing.subtotal + pricing.tax);
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let catalog = InMemoryCatalog::seed();
        let cart = CartEngine::new();
        assert_eq!(cart.pricing(&catalog).unwrap(), PricingSnapshot::empty());
    }

    #[test]
    fn test_stale_line_surfaces_not_found() {
        let catalog = InMemoryCatalog::seed();
        let mut cart = CartEngine::new();
        cart.add(id(1));
        cart.add(id(42)); // never in the catalog

        assert_eq!(cart.subtotal(&catalog), Err(CartError::NotFound(id(42))));
        assert_eq!(cart.pricing(&catalog), Err(CartError::NotFound(id(42))));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cart = CartEngine::new();
        cart.add(id(1));
        cart.add(id(2));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.lines(), Vec::new());
    }

    #[test]
    fn test_from_lines_floors_zero_quantity() {
        let cart = CartEngine::from_lines([CartLine {
            product_id: id(1),
            quantity: 0,
        }]);
        assert_eq!(cart.quantity(id(1)), Some(1));
    }

    #[test]
    fn test_unit_count() {
        let mut cart = CartEngine::new();
        cart.add(id(1));
        cart.add(id(2));
        cart.increment(id(2)).unwrap();
        assert_eq!(cart.unit_count(), 3);
        assert_eq!(cart.len(), 2);
    }
}
