//! Selection sets for favorites and cart membership.
//!
//! A selection set is a plain set of product ids toggled by direct user
//! action. There is deliberately no existence check against the catalog:
//! unknown ids are inserted and removed like any other. This mirrors the
//! shipped behavior and is a known integrity gap; stale cart entries are
//! reconciled at pricing time instead.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use mapleshop_core::ProductId;

/// A set of product identifiers, no duplicates, insertion order irrelevant.
///
/// Created empty at session start and mutated only by toggle-style
/// operations. Iteration order is ascending by id so observers see a stable
/// listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: BTreeSet<ProductId>,
}

impl SelectionSet {
    /// Create an empty selection set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Flip membership for `id`: insert when absent, remove when present.
    ///
    /// Returns `true` when `id` is a member after the call. Idempotent under
    /// double-toggle.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Insert `id`, returning `true` when it was newly added.
    pub fn insert(&mut self, id: ProductId) -> bool {
        self.ids.insert(id)
    }

    /// Remove `id`, returning `true` when it was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.ids.remove(&id)
    }

    /// Whether `id` is currently a member.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl FromIterator<ProductId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = ProductId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = ProductId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, ProductId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut set = SelectionSet::new();
        let id = ProductId::new(1);

        assert!(set.toggle(id));
        assert!(set.contains(id));
        assert!(!set.toggle(id));
        assert!(!set.contains(id));
    }

    #[test]
    fn test_toggle_parity() {
        // Final membership = initial XOR (odd number of toggles)
        let id = ProductId::new(7);
        for calls in 0..5 {
            let mut set = SelectionSet::new();
            for _ in 0..calls {
                set.toggle(id);
            }
            assert_eq!(set.contains(id), calls % 2 == 1, "after {calls} toggles");
        }
    }

    #[test]
    fn test_unknown_ids_are_accepted() {
        // No catalog existence check, by observed behavior
        let mut set = SelectionSet::new();
        assert!(set.toggle(ProductId::new(99_999)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut set = SelectionSet::new();
        set.insert(ProductId::new(1));
        set.insert(ProductId::new(2));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut set = SelectionSet::new();
        set.insert(ProductId::new(3));
        set.insert(ProductId::new(1));
        set.insert(ProductId::new(2));

        let ids: Vec<i64> = set.iter().map(|id| id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
