//! The observable shop state container.
//!
//! [`ShopStore`] owns the favorites set and the cart engine, shares the
//! catalog by reference, and notifies subscribers synchronously after every
//! mutation. It is the single seam between the engine and whatever renders
//! it; nothing here knows about any UI technology, so the whole flow is
//! testable headless.

use std::fmt;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mapleshop_core::{CartLine, Product, ProductId};

use crate::catalog::CatalogStore;
use crate::engine::{CartEngine, PricingSnapshot};
use crate::error::{CartError, Result};
use crate::order::OrderConfirmation;
use crate::payment;
use crate::selection::SelectionSet;

/// A state change published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The favorites set changed; carries the new member count.
    FavoritesChanged {
        /// Number of favorited products.
        count: usize,
    },
    /// The cart changed; carries the new total unit count (the badge
    /// number).
    CartChanged {
        /// Units across all cart lines.
        unit_count: u32,
    },
    /// A checkout completed and the cart was cleared.
    CheckedOut {
        /// The confirmed order's reference.
        order_id: Uuid,
    },
}

type Subscriber = Box<dyn FnMut(&StoreEvent) + Send>;

/// Session-scoped shop state: favorites, cart, and a shared catalog.
///
/// Mutated only by direct user action and observed by a single rendering
/// surface; all operations are synchronous and subscribers are notified
/// inline before the mutating call returns.
pub struct ShopStore<C> {
    catalog: Arc<C>,
    favorites: SelectionSet,
    cart: CartEngine,
    subscribers: Vec<Subscriber>,
}

impl<C: CatalogStore> ShopStore<C> {
    /// Create an empty session over the given catalog snapshot.
    #[must_use]
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            favorites: SelectionSet::new(),
            cart: CartEngine::new(),
            subscribers: Vec::new(),
        }
    }

    /// Restore a session from previously persisted favorites and cart
    /// lines.
    #[must_use]
    pub fn restore(
        catalog: Arc<C>,
        favorites: SelectionSet,
        lines: impl IntoIterator<Item = CartLine>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            cart: CartEngine::from_lines(lines),
            subscribers: Vec::new(),
        }
    }

    /// Register a synchronous observer for state changes.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&mut self, event: StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    // =========================================================================
    // Catalog (read-only pass-through)
    // =========================================================================

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Flip favorite membership for `id`; returns the new membership.
    ///
    /// Favorites and cart are independent: removing a favorite never touches
    /// the cart, and vice versa.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let now_member = self.favorites.toggle(id);
        self.notify(StoreEvent::FavoritesChanged {
            count: self.favorites.len(),
        });
        now_member
    }

    /// The current favorites set.
    #[must_use]
    pub fn favorites(&self) -> &SelectionSet {
        &self.favorites
    }

    /// Favorited products that resolve in the catalog, in id order.
    ///
    /// Favorited ids the catalog does not know are skipped here; favorites
    /// carry no pricing, so there is nothing to surface for them.
    #[must_use]
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.favorites
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `id` to the cart with quantity 1; no-op on quantity when already
    /// present. Returns `true` when newly added.
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let added = self.cart.add(id);
        if added {
            self.notify(StoreEvent::CartChanged {
                unit_count: self.cart.unit_count(),
            });
        }
        added
    }

    /// Remove `id` and its quantity from the cart. Returns `true` when it
    /// was present.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            self.notify(StoreEvent::CartChanged {
                unit_count: self.cart.unit_count(),
            });
        }
        removed
    }

    /// Flip cart membership for `id`; returns the new membership.
    ///
    /// Insertion goes through [`ShopStore::add_to_cart`], so a re-added
    /// product starts back at quantity 1.
    pub fn toggle_in_cart(&mut self, id: ProductId) -> bool {
        if self.cart.contains(id) {
            self.remove_from_cart(id);
            false
        } else {
            self.add_to_cart(id);
            true
        }
    }

    /// Increase the quantity for `id` by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if `id` has no cart line.
    pub fn increment_quantity(&mut self, id: ProductId) -> Result<u32> {
        let quantity = self.cart.increment(id)?;
        self.notify(StoreEvent::CartChanged {
            unit_count: self.cart.unit_count(),
        });
        Ok(quantity)
    }

    /// Decrease the quantity for `id` by one, floored at 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if `id` has no cart line, or
    /// [`CartError::InvalidQuantity`] when already at 1 (nothing mutates and
    /// no event fires).
    pub fn decrement_quantity(&mut self, id: ProductId) -> Result<u32> {
        let quantity = self.cart.decrement(id)?;
        self.notify(StoreEvent::CartChanged {
            unit_count: self.cart.unit_count(),
        });
        Ok(quantity)
    }

    /// The current cart lines in ascending id order.
    #[must_use]
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.lines()
    }

    /// The set of product ids currently in the cart.
    #[must_use]
    pub fn in_cart(&self) -> SelectionSet {
        self.cart.ids().collect()
    }

    /// Total unit count across all cart lines.
    #[must_use]
    pub fn cart_unit_count(&self) -> u32 {
        self.cart.unit_count()
    }

    /// Derive the current subtotal/tax/total.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if a cart id no longer resolves in
    /// the catalog; see [`ShopStore::prune_unavailable`] for the recovery
    /// path.
    pub fn pricing_snapshot(&self) -> Result<PricingSnapshot> {
        self.cart.pricing(self.catalog.as_ref())
    }

    /// Drop cart lines whose ids the catalog no longer resolves.
    ///
    /// Returns the removed ids so the caller can report each product as no
    /// longer available. Fires a single cart event when anything was
    /// removed.
    pub fn prune_unavailable(&mut self) -> Vec<ProductId> {
        let stale: Vec<ProductId> = self
            .cart
            .ids()
            .filter(|&id| self.catalog.get(id).is_none())
            .collect();
        for &id in &stale {
            self.cart.remove(id);
        }
        if !stale.is_empty() {
            info!(count = stale.len(), "pruned unavailable cart lines");
            self.notify(StoreEvent::CartChanged {
                unit_count: self.cart.unit_count(),
            });
        }
        stale
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Complete the order: price the cart, then clear it.
    ///
    /// The sole way `inCart` becomes empty other than individual removals.
    /// Calling with an empty cart is a no-op and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if a cart id no longer resolves; the
    /// cart is left untouched in that case.
    pub fn checkout(&mut self) -> Result<Option<OrderConfirmation>> {
        if self.cart.is_empty() {
            return Ok(None);
        }

        let pricing = self.pricing_snapshot()?;
        let confirmation = OrderConfirmation::new(pricing, self.cart.unit_count());
        self.cart.clear();

        info!(
            order_id = %confirmation.order_id,
            total = %confirmation.pricing.total,
            "checkout completed"
        );
        self.notify(StoreEvent::CartChanged { unit_count: 0 });
        self.notify(StoreEvent::CheckedOut {
            order_id: confirmation.order_id,
        });
        Ok(Some(confirmation))
    }

    /// Validate the payment form, then check out.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Validation`] with the first failing field's
    /// message, blocking checkout without mutating anything, or any error
    /// from [`ShopStore::checkout`].
    pub fn checkout_with_payment(
        &mut self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
    ) -> Result<Option<OrderConfirmation>> {
        payment::validate_payment(card_number, expiry, cvv).map_err(CartError::Validation)?;
        self.checkout()
    }
}

impl<C> fmt::Debug for ShopStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopStore")
            .field("favorites", &self.favorites)
            .field("cart", &self.cart)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
