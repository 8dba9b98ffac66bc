//! Order confirmation produced by a successful checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::PricingSnapshot;

/// Receipt for a completed (simulated) order.
///
/// Captures the final pricing at the moment the cart was cleared; there is
/// no server-side order record behind this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Locally generated order reference.
    pub order_id: Uuid,
    /// Pricing at checkout time.
    pub pricing: PricingSnapshot,
    /// Total units across all lines.
    pub unit_count: u32,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Create a confirmation stamped with a fresh order id and the current
    /// time.
    #[must_use]
    pub fn new(pricing: PricingSnapshot, unit_count: u32) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            pricing,
            unit_count,
            placed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_ids_are_unique() {
        let a = OrderConfirmation::new(PricingSnapshot::empty(), 0);
        let b = OrderConfirmation::new(PricingSnapshot::empty(), 0);
        assert_ne!(a.order_id, b.order_id);
    }

    #[test]
    fn test_serde_roundtrip() {
        let confirmation = OrderConfirmation::new(PricingSnapshot::empty(), 3);
        let json = serde_json::to_string(&confirmation).unwrap();
        let parsed: OrderConfirmation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, confirmation);
    }
}
