//! Cart State

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::{MergePolicy, line::CartLine},
    products::{Product, ProductId},
};

/// The persisted shape of a cart: its lines and the drawer visibility flag.
///
/// All operations are total. Unknown ids are ignored and missing prices count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Lines in insertion order, at most one per product id
    pub lines: Vec<CartLine>,

    /// Whether the cart drawer is shown
    #[serde(default)]
    pub is_open: bool,
}

impl CartState {
    /// Add `quantity` of `product`, merging into an existing line for the same id.
    ///
    /// A zero quantity is raised to one.
    pub fn add_item(&mut self, product: &Product, quantity: u32, policy: MergePolicy) {
        let quantity = quantity.max(1);

        match self.line_mut(&product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);

                if policy == MergePolicy::RefreshSnapshot {
                    line.refresh_snapshot(product);
                }
            }
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product_id != product_id);
    }

    /// Set the absolute quantity of a line. Non-positive quantities remove the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Look up the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price times quantity over all lines, saturating at the `Decimal` bounds.
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(id: &str, price: i64) -> Product {
        Product::new(id).with_price(Decimal::from(price), "INR")
    }

    #[test]
    fn add_item_appends_in_insertion_order() {
        let mut state = CartState::default();

        state.add_item(&priced("b", 10), 1, MergePolicy::default());
        state.add_item(&priced("a", 20), 1, MergePolicy::default());

        let ids: Vec<&str> = state.lines.iter().map(|l| l.product_id.as_str()).collect();

        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn add_item_with_zero_quantity_adds_one() {
        let mut state = CartState::default();

        state.add_item(&priced("a", 10), 0, MergePolicy::default());

        assert_eq!(state.total_items(), 1);
    }

    #[test]
    fn merge_keeps_original_snapshot_by_default() {
        let mut state = CartState::default();

        state.add_item(&priced("a", 100), 1, MergePolicy::KeepSnapshot);
        state.add_item(&priced("a", 80).with_name("Renamed"), 1, MergePolicy::KeepSnapshot);

        let line = state.line(&ProductId::new("a"));

        assert_eq!(line.map(|l| l.quantity), Some(2));
        assert_eq!(line.and_then(|l| l.unit_price), Some(Decimal::from(100)));
        assert_eq!(line.and_then(|l| l.name.clone()), None);
    }

    #[test]
    fn merge_refreshes_snapshot_when_requested() {
        let mut state = CartState::default();

        state.add_item(&priced("a", 100), 1, MergePolicy::RefreshSnapshot);
        state.add_item(&priced("a", 80), 2, MergePolicy::RefreshSnapshot);

        assert_eq!(state.len(), 1);
        assert_eq!(state.total_items(), 3);
        assert_eq!(state.total_price(), Decimal::from(240));
    }

    #[test]
    fn quantity_saturates_instead_of_overflowing() {
        let mut state = CartState::default();

        state.add_item(&priced("a", 1), u32::MAX, MergePolicy::default());
        state.add_item(&priced("a", 1), 5, MergePolicy::default());

        assert_eq!(state.line(&ProductId::new("a")).map(|l| l.quantity), Some(u32::MAX));
    }

    #[test]
    fn total_price_saturates_instead_of_overflowing() {
        let mut state = CartState::default();
        let huge = Product::new("a")
            .with_price(Decimal::from_i128_with_scale(10_i128.pow(20), 0), "INR");

        state.add_item(&huge, 1, MergePolicy::default());
        state.update_quantity(&ProductId::new("a"), 1_000_000_000);
        state.add_item(&priced("b", 10), 1, MergePolicy::default());

        assert_eq!(state.total_price(), Decimal::MAX);
        assert_eq!(state.total_items(), 1_000_000_001);
    }

    #[test]
    fn update_quantity_is_an_absolute_set() {
        let mut state = CartState::default();

        state.add_item(&priced("a", 10), 4, MergePolicy::default());
        state.update_quantity(&ProductId::new("a"), 2);

        assert_eq!(state.total_items(), 2);
    }

    #[test]
    fn update_quantity_on_unknown_id_is_a_no_op() {
        let mut state = CartState::default();

        state.add_item(&priced("a", 10), 1, MergePolicy::default());
        state.update_quantity(&ProductId::new("missing"), 9);

        assert_eq!(state.len(), 1);
        assert_eq!(state.total_items(), 1);
    }

    #[test]
    fn remove_item_on_empty_cart_is_a_no_op() {
        let mut state = CartState::default();

        state.remove_item(&ProductId::new("missing"));

        assert!(state.is_empty());
    }

    #[test]
    fn clear_keeps_visibility_flag() {
        let mut state = CartState {
            is_open: true,
            ..CartState::default()
        };

        state.add_item(&priced("a", 10), 1, MergePolicy::default());
        state.clear();

        assert!(state.is_empty());
        assert!(state.is_open);
    }
}
