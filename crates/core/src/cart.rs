//! Cart aggregation.
//!
//! A [`Cart`] is the client's in-progress selection: an ordered sequence of
//! lines, each pairing a [`MenuItem`] with a quantity, plus the table the
//! order is for. Checkout turns a valid cart into an [`OrderDraft`] and
//! resets the cart for the next round.

use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    draft::{DraftLine, OrderDraft},
    menu::MenuItem,
};

/// Errors reported when a cart cannot be checked out.
///
/// Checkout failures are user-correctable: the cart is left untouched so the
/// customer can fix the problem and try again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No table was selected before checkout.
    #[error("select a table before placing the order")]
    NoTableSelected,

    /// The cart has no lines.
    #[error("add at least one item before placing the order")]
    EmptyCart,
}

/// A menu item selected into a cart, with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The selected menu item.
    pub item: MenuItem,

    /// How many of it. Never below 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of the whole line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.item.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// The working selection set for one table's order.
///
/// Holds at most one line per menu item id: re-adding an item bumps the
/// existing line's quantity instead of appending a duplicate.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
    table: Option<String>,
}

impl Cart {
    /// Create an empty cart with no table selected.
    #[must_use]
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add a menu item to the cart.
    ///
    /// If a line for the same item id already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended.
    /// Always succeeds.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.line_mut(item.id) {
            line.quantity = line.quantity.saturating_add(1);

            return;
        }

        self.lines.push(CartLine {
            item: item.clone(),
            quantity: 1,
        });
    }

    /// Remove every line matching the given item id. No-op when absent.
    pub fn remove_item(&mut self, id: u32) {
        self.lines.retain(|line| line.item.id != id);
    }

    /// Increase the quantity of the line matching `id` by one.
    /// No-op when absent.
    pub fn increment(&mut self, id: u32) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity of the line matching `id` by one, floored at 1.
    ///
    /// Decrementing never removes the line; removal is a separate explicit
    /// action ([`Cart::remove_item`]). No-op when absent.
    pub fn decrement(&mut self, id: u32) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_sub(1).max(1);
        }
    }

    /// Select the table this cart will be ordered for.
    pub fn select_table(&mut self, table: impl Into<String>) {
        self.table = Some(table.into());
    }

    /// The currently selected table, if any.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Sum of `unit price * quantity` over all lines, rounded half-up to
    /// two decimal places. An empty cart totals `0.00`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let mut total = self
            .lines
            .iter()
            .fold(Decimal::ZERO, |sum, line| {
                sum.saturating_add(line.line_total())
            })
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        total.rescale(2);

        total
    }

    /// Finalize the cart into an [`OrderDraft`].
    ///
    /// On success the cart is cleared: lines emptied, table reset. On
    /// failure the cart is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NoTableSelected`] when no non-empty table has
    /// been selected, and [`CartError::EmptyCart`] when there are no lines.
    pub fn checkout(&mut self) -> Result<OrderDraft, CartError> {
        let table = match self.table.as_deref() {
            Some(table) if !table.trim().is_empty() => table.to_string(),
            _ => return Err(CartError::NoTableSelected),
        };

        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let draft = OrderDraft {
            table,
            lines: self
                .lines
                .iter()
                .map(|line| DraftLine {
                    name: line.item.name.clone(),
                    price: line.item.price,
                    quantity: line.quantity,
                })
                .collect(),
            total: self.total(),
        };

        self.lines.clear();
        self.table = None;

        Ok(draft)
    }

    /// Iterate over the lines in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: u32) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use crate::menu::Category;

    use super::*;

    fn item(id: u32, price: Decimal) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {id}"),
            description: String::new(),
            price,
            category: Category::Skewer,
        }
    }

    #[test]
    fn add_item_appends_line_with_quantity_one() {
        let mut cart = Cart::new();

        cart.add_item(&item(1, dec!(10.00)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.iter().next().map(|line| line.quantity), Some(1));
    }

    #[test]
    fn re_adding_same_item_increments_quantity() {
        let mut cart = Cart::new();
        let picanha = item(1, dec!(29.90));

        cart.add_item(&picanha);
        cart.add_item(&picanha);

        assert_eq!(cart.len(), 1, "same id must not duplicate lines");
        assert_eq!(cart.iter().next().map(|line| line.quantity), Some(2));
    }

    #[test]
    fn remove_item_on_absent_id_is_a_noop() {
        let mut cart = Cart::new();

        cart.add_item(&item(1, dec!(10.00)));
        cart.remove_item(99);

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn decrement_floors_at_one() {
        let mut cart = Cart::new();

        cart.add_item(&item(1, dec!(10.00)));
        cart.decrement(1);
        cart.decrement(1);

        assert_eq!(
            cart.iter().next().map(|line| line.quantity),
            Some(1),
            "decrement must never drop a line below quantity 1"
        );
    }

    #[test]
    fn increment_and_decrement_on_absent_id_are_noops() {
        let mut cart = Cart::new();

        cart.increment(7);
        cart.decrement(7);

        assert!(cart.is_empty());
    }

    #[test]
    fn total_of_empty_cart_is_zero_with_two_decimals() {
        let cart = Cart::new();

        assert_eq!(cart.total().to_string(), "0.00");
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        let torta = item(4, dec!(15.00));

        cart.add_item(&item(1, dec!(29.90)));
        cart.add_item(&torta);
        cart.add_item(&torta);

        assert_eq!(cart.total().to_string(), "59.90");
    }

    #[test]
    fn checkout_without_table_leaves_cart_unchanged() {
        let mut cart = Cart::new();

        cart.add_item(&item(1, dec!(10.00)));

        let result = cart.checkout();

        assert_eq!(result, Err(CartError::NoTableSelected));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn checkout_with_blank_table_is_rejected() {
        let mut cart = Cart::new();

        cart.add_item(&item(1, dec!(10.00)));
        cart.select_table("   ");

        assert_eq!(cart.checkout(), Err(CartError::NoTableSelected));
    }

    #[test]
    fn checkout_of_empty_cart_is_rejected() {
        let mut cart = Cart::new();

        cart.select_table("3");

        assert_eq!(cart.checkout(), Err(CartError::EmptyCart));
        assert_eq!(cart.table(), Some("3"), "failed checkout must not reset the table");
    }

    #[test]
    fn checkout_clears_cart_and_builds_draft() -> testresult::TestResult {
        let mut cart = Cart::new();
        let picanha = item(1, dec!(29.90));

        cart.add_item(&picanha);
        cart.add_item(&picanha);
        cart.select_table("3");

        let draft = cart.checkout()?;

        assert_eq!(draft.table, "3");
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.total.to_string(), "59.80");
        assert!(cart.is_empty());
        assert_eq!(cart.table(), None);

        Ok(())
    }
}
