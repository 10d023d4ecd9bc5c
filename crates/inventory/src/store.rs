//! The inventory store: named items mapped to stock levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{ItemName, Quantity};

use crate::journal::Journal;

/// Stock level below which an item counts as low.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Mapping from item name to current stock level.
///
/// Backed by a `BTreeMap`, so iteration and everything derived from it
/// (including the low-item listing and the report) runs in lexicographic
/// name order. Serializes transparently as a flat JSON object, e.g.
/// `{"apple": 7, "banana": -2}`.
///
/// Removal never leaves a non-positive entry behind; a negative level can
/// only arise from a corrective negative add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    stock: BTreeMap<ItemName, i64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` (possibly negative) to the item's stock, creating the entry
    /// at 0 first if absent. Appends an `Added <qty> of <name>` entry to the
    /// journal and returns the new level.
    pub fn add(&mut self, name: &ItemName, qty: Quantity, journal: &mut Journal) -> i64 {
        let level = self.stock.entry(name.clone()).or_insert(0);
        *level += qty.get();
        journal.record(format!("Added {qty} of {name}"));
        *level
    }

    /// Subtract `qty` from the item's stock. Absent items are a no-op; an
    /// entry whose level drops to 0 or below is deleted entirely.
    pub fn remove(&mut self, name: &ItemName, qty: Quantity) {
        let Some(level) = self.stock.get_mut(name) else {
            return;
        };
        *level -= qty.get();
        if *level <= 0 {
            self.stock.remove(name);
        }
    }

    /// Current stock level, 0 if the item is absent. Never fails.
    pub fn quantity_of(&self, name: &ItemName) -> i64 {
        self.stock.get(name).copied().unwrap_or(0)
    }

    /// Names whose stock is strictly below `threshold`, in name order.
    pub fn low_items(&self, threshold: i64) -> Vec<ItemName> {
        self.stock
            .iter()
            .filter(|&(_, &level)| level < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Render the diagnostic stock report, one item per line in name order.
    pub fn render_report(&self) -> String {
        let mut report = String::from("Items Report\n");
        for (name, level) in &self.stock {
            report.push_str(&format!("{name} -> {level}\n"));
        }
        report
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.stock.iter().map(|(name, &level)| (name, level))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn name(raw: &str) -> ItemName {
        ItemName::parse(raw).unwrap()
    }

    #[test]
    fn add_accumulates_across_calls() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("apple"), Quantity::new(10), &mut journal);
        inv.add(&name("apple"), Quantity::new(5), &mut journal);

        assert_eq!(inv.quantity_of(&name("apple")), 15);
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn add_journals_the_mutation() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("apple"), Quantity::new(10), &mut journal);

        assert!(journal.entries()[0].ends_with(": Added 10 of apple"));
    }

    #[test]
    fn negative_add_is_kept_as_corrective_stock() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("banana"), Quantity::new(-2), &mut journal);

        // Only removal deletes non-positive entries; a negative add persists.
        assert_eq!(inv.quantity_of(&name("banana")), -2);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_deletes_entry_at_or_below_zero() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("apple"), Quantity::new(3), &mut journal);
        inv.remove(&name("apple"), Quantity::new(3));

        assert_eq!(inv.quantity_of(&name("apple")), 0);
        assert!(inv.is_empty());
        assert!(inv.low_items(LOW_STOCK_THRESHOLD).is_empty());
    }

    #[test]
    fn remove_absent_item_is_a_noop() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();
        inv.add(&name("apple"), Quantity::new(7), &mut journal);

        let before = inv.clone();
        inv.remove(&name("orange"), Quantity::new(1));

        assert_eq!(inv, before);
    }

    #[test]
    fn partial_remove_keeps_remainder() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("apple"), Quantity::new(10), &mut journal);
        inv.remove(&name("apple"), Quantity::new(3));

        assert_eq!(inv.quantity_of(&name("apple")), 7);
    }

    #[test]
    fn low_items_uses_strict_threshold() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("apple"), Quantity::new(10), &mut journal);
        inv.add(&name("banana"), Quantity::new(3), &mut journal);

        assert_eq!(inv.low_items(5), vec![name("banana")]);
        // A level equal to the threshold is not low.
        assert!(inv.low_items(3).is_empty());
    }

    #[test]
    fn low_items_are_in_name_order() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("pear"), Quantity::new(1), &mut journal);
        inv.add(&name("apple"), Quantity::new(2), &mut journal);
        inv.add(&name("mango"), Quantity::new(9), &mut journal);

        assert_eq!(inv.low_items(5), vec![name("apple"), name("pear")]);

        let order: Vec<&str> = inv.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["apple", "mango", "pear"]);
    }

    #[test]
    fn report_lists_items_in_name_order() {
        let mut inv = Inventory::new();
        let mut journal = Journal::new();

        inv.add(&name("banana"), Quantity::new(3), &mut journal);
        inv.add(&name("apple"), Quantity::new(7), &mut journal);

        assert_eq!(
            inv.render_report(),
            "Items Report\napple -> 7\nbanana -> 3\n"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the stored level is the running sum of all adds for
        /// that name.
        #[test]
        fn quantity_is_sum_of_adds(
            deltas in prop::collection::vec(-1_000i64..1_000i64, 1..20)
        ) {
            let mut inv = Inventory::new();
            let mut journal = Journal::new();
            let apple = name("apple");

            for &delta in &deltas {
                inv.add(&apple, Quantity::new(delta), &mut journal);
            }

            prop_assert_eq!(inv.quantity_of(&apple), deltas.iter().sum::<i64>());
            prop_assert_eq!(journal.len(), deltas.len());
        }

        /// Property: removing at least the current level deletes the entry.
        #[test]
        fn remove_at_least_level_deletes_entry(
            level in 1i64..1_000i64,
            extra in 0i64..1_000i64
        ) {
            let mut inv = Inventory::new();
            let mut journal = Journal::new();
            let apple = name("apple");

            inv.add(&apple, Quantity::new(level), &mut journal);
            inv.remove(&apple, Quantity::new(level + extra));

            prop_assert_eq!(inv.quantity_of(&apple), 0);
            prop_assert!(inv.is_empty());
        }
    }
}
