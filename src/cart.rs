//! Cart

use indexmap::{IndexMap, map::Entry};
use rustc_hash::FxBuildHasher;

use crate::prices::Price;

/// One distinct item in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    name: String,
    unit_price: Price,
    quantity: u32,
}

impl CartLine {
    fn new(name: String, unit_price: Price) -> Self {
        Self {
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// Item name, unique within the cart.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit, as stored when the item was first added.
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Number of units, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.unit_price.times(self.quantity)
    }
}

/// In-memory cart, keyed by item name and iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: IndexMap<String, CartLine, FxBuildHasher>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `name`.
    ///
    /// A repeat add increments the existing line and keeps its stored price; `unit_price` is only
    /// used when the item is not in the cart yet.
    pub fn add_item(&mut self, name: impl Into<String>, unit_price: Price) -> &CartLine {
        match self.lines.entry(name.into()) {
            Entry::Occupied(entry) => {
                let line = entry.into_mut();
                line.quantity = line.quantity.saturating_add(1);
                line
            }
            Entry::Vacant(entry) => {
                let name = entry.key().clone();
                entry.insert(CartLine::new(name, unit_price))
            }
        }
    }

    /// Remove the line for `name`, returning it if it was present.
    ///
    /// Removing an absent name is a no-op. The remaining lines keep their order.
    pub fn remove_item(&mut self, name: &str) -> Option<CartLine> {
        self.lines.shift_remove(name)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line totals; 0 for an empty cart.
    pub fn grand_total(&self) -> u64 {
        self.lines
            .values()
            .fold(0u64, |acc, line| acc.saturating_add(line.line_total()))
    }

    /// Sum of all quantities; 0 for an empty cart.
    pub fn item_count(&self) -> u64 {
        self.lines
            .values()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Look up a line by name.
    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.lines.get(name)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn names(cart: &Cart) -> Vec<&str> {
        cart.lines().map(CartLine::name).collect()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.grand_total(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn add_inserts_line_with_quantity_one() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item("Shahi Paneer", Price::new(280));

        let line = cart.get("Shahi Paneer").ok_or("missing line")?;

        assert_eq!(line.quantity(), 1);
        assert_eq!(line.unit_price(), Price::new(280));
        assert_eq!(line.line_total(), 280);

        Ok(())
    }

    #[test]
    fn repeat_add_increments_single_line() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item("Shahi Paneer", Price::new(280));
        let line = cart.add_item("Shahi Paneer", Price::new(280));

        assert_eq!(line.quantity(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.grand_total(), 560);
        assert_eq!(cart.item_count(), 2);

        Ok(())
    }

    #[test]
    fn repeat_add_keeps_stored_price() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item("Naan", Price::new(40));
        cart.add_item("Naan", Price::new(999));

        let line = cart.get("Naan").ok_or("missing line")?;

        assert_eq!(line.unit_price(), Price::new(40));
        assert_eq!(cart.grand_total(), 80);

        Ok(())
    }

    #[test]
    fn totals_span_all_lines() {
        let mut cart = Cart::new();

        cart.add_item("Shahi Paneer", Price::new(280));
        cart.add_item("Shahi Paneer", Price::new(280));
        cart.add_item("Naan", Price::new(40));

        assert_eq!(cart.grand_total(), 600);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn remove_deletes_whole_line() {
        let mut cart = Cart::new();

        cart.add_item("Shahi Paneer", Price::new(280));
        cart.add_item("Shahi Paneer", Price::new(280));
        cart.add_item("Naan", Price::new(40));

        let removed = cart.remove_item("Shahi Paneer");

        assert_eq!(removed.as_ref().map(CartLine::quantity), Some(2));
        assert_eq!(cart.grand_total(), 40);
        assert_eq!(cart.item_count(), 1);
        assert!(cart.get("Shahi Paneer").is_none());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("Naan", Price::new(40));
        let before = cart.clone();

        assert!(cart.remove_item("Dal Makhani").is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn lines_keep_insertion_order_across_removal() {
        let mut cart = Cart::new();

        cart.add_item("Naan", Price::new(40));
        cart.add_item("Dal Makhani", Price::new(220));
        cart.add_item("Lassi", Price::new(90));
        cart.remove_item("Dal Makhani");
        cart.add_item("Naan", Price::new(40));

        assert_eq!(names(&cart), ["Naan", "Lassi"]);

        cart.add_item("Dal Makhani", Price::new(220));

        assert_eq!(names(&cart), ["Naan", "Lassi", "Dal Makhani"]);
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();

        cart.add_item("Naan", Price::new(40));
        cart.add_item("Lassi", Price::new(90));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.grand_total(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn grand_total_saturates() {
        let mut cart = Cart::new();

        cart.add_item("Gold Thali", Price::new(u64::MAX));
        cart.add_item("Naan", Price::new(40));

        assert_eq!(cart.grand_total(), u64::MAX);
    }
}
