//! # Cart
//!
//! The customer's in-progress selection.
//!
//! Stock is reserved the moment an item goes into the cart, not at checkout.
//! Every cart operation therefore works against the catalog as well:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation            Cart                     Catalog stock            │
//! │  ─────────            ────                     ─────────────            │
//! │                                                                         │
//! │  add_to_cart(id, n) ► line.qty += n  (or new) ► stock -= n              │
//! │                                                                         │
//! │  remove(id, n)      ► line.qty -= n  (or drop) ► stock += removed       │
//! │                                                                         │
//! │  clear()            ► all lines dropped        ► stock += each line     │
//! │                                                                         │
//! │  checkout()         ► all lines → Bill         ► (unchanged: consumed)  │
//! │                                                                         │
//! │  Restoring to a product that was deleted meanwhile is skipped.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has quantity >= 1; a line that would drop to zero is removed
//! - A failed operation changes neither the cart nor the catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::{Bill, CartLine, CartView, ProductId};
use crate::validation::validate_quantity;

/// Stock handed back to the catalog for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restock {
    pub product_id: ProductId,
    pub quantity: i64,
    /// `false` when the product had been deleted and the units were dropped.
    pub restored: bool,
}

/// Result of [`Cart::remove_from_cart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    pub restock: Restock,
    /// Units left in the cart line; zero means the line is gone.
    pub remaining: i64,
}

impl Removal {
    pub fn line_removed(&self) -> bool {
        self.remaining == 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Reserves `quantity` units of a product and puts them in the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases, the first name and
    ///   price snapshot are kept
    /// - Product not in cart: a new line is created from the product as it
    ///   is right now
    ///
    /// ## Errors
    /// - `Validation` if `quantity < 1`
    /// - `ProductNotFound` if the product is not in the catalog
    /// - `InsufficientStock` if `quantity` exceeds the shelf stock
    /// - `Validation` (`TooLarge`) if the cart total would no longer fit in
    ///   `Money`; nothing is reserved
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::{Cart, Catalog, Money};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_product(1, "Apple", Money::from_major(50), 100).unwrap();
    ///
    /// let mut cart = Cart::new();
    /// cart.add_to_cart(&mut catalog, 1, 3).unwrap();
    ///
    /// assert_eq!(catalog.find_by_id(1).unwrap().stock_quantity, 97);
    /// assert_eq!(cart.view().total, Money::from_major(150));
    /// ```
    pub fn add_to_cart(
        &mut self,
        catalog: &mut Catalog,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<&CartLine> {
        validate_quantity(quantity)?;

        let (unit_price, held) = match self.line(product_id) {
            Some(line) => (line.unit_price, line.quantity),
            None => (catalog.find_by_id(product_id)?.unit_price, 0),
        };
        let new_quantity = held.checked_add(quantity).ok_or_else(|| too_large("quantity"))?;
        self.ensure_total_fits(product_id, unit_price, new_quantity)?;

        let product = catalog.reserve(product_id, quantity)?;

        let idx = match self.position(product_id) {
            Some(idx) => {
                self.lines[idx].quantity = new_quantity;
                idx
            }
            None => {
                self.lines.push(CartLine::from_product(product, quantity));
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[idx])
    }

    /// Current lines and their total. An empty cart totals zero.
    pub fn view(&self) -> CartView {
        CartView {
            lines: self.lines.clone(),
            total: self.total(),
        }
    }

    /// Takes `quantity` units of a product out of the cart.
    ///
    /// Asking for as many units as the line holds, or more, removes the
    /// whole line and hands all of its units back. That is not an error.
    ///
    /// ## Errors
    /// - `Validation` if `quantity < 1`
    /// - `CartLineNotFound` if the cart has no line for `product_id`
    pub fn remove_from_cart(
        &mut self,
        catalog: &mut Catalog,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<Removal> {
        validate_quantity(quantity)?;

        let idx = self
            .position(product_id)
            .ok_or(CoreError::CartLineNotFound(product_id))?;
        let held = self.lines[idx].quantity;

        let (returned, remaining) = if quantity >= held {
            self.lines.remove(idx);
            (held, 0)
        } else {
            self.lines[idx].quantity = held - quantity;
            (quantity, held - quantity)
        };

        let restored = catalog.restock(product_id, returned);
        Ok(Removal {
            restock: Restock {
                product_id,
                quantity: returned,
                restored,
            },
            remaining,
        })
    }

    /// Empties the cart, handing every line's units back to the catalog.
    ///
    /// Always succeeds, including on an empty cart. The returned list says
    /// what happened to each line.
    pub fn clear(&mut self, catalog: &mut Catalog) -> Vec<Restock> {
        self.lines
            .drain(..)
            .map(|line| Restock {
                product_id: line.product_id,
                quantity: line.quantity,
                restored: catalog.restock(line.product_id, line.quantity),
            })
            .collect()
    }

    /// Finalizes the cart into a bill stamped with the current time.
    ///
    /// See [`Cart::checkout_at`].
    pub fn checkout(&mut self, ledger: &mut Ledger) -> CoreResult<Bill> {
        self.checkout_at(ledger, Utc::now())
    }

    /// Finalizes the cart into a bill, records it, and empties the cart.
    ///
    /// Reserved stock is consumed: nothing is handed back to the catalog.
    ///
    /// ## Errors
    /// `EmptyCart` if there is nothing to check out.
    pub fn checkout_at(&mut self, ledger: &mut Ledger, at: DateTime<Utc>) -> CoreResult<Bill> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let bill = Bill::from_lines(&self.lines, at);
        ledger.record(bill.clone());
        self.lines.clear();
        Ok(bill)
    }

    /// The line for a product, if the cart holds one.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }

    /// Checks that the cart total, summed in line order, stays within `i64`
    /// once `product_id` holds `quantity` units at `unit_price`.
    fn ensure_total_fits(
        &self,
        product_id: ProductId,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<()> {
        let subtotal = unit_price.checked_mul_quantity(quantity);
        let is_new = self.line(product_id).is_none();

        self.lines
            .iter()
            .map(|l| {
                if l.product_id == product_id {
                    subtotal
                } else {
                    Some(l.subtotal())
                }
            })
            .chain(is_new.then_some(subtotal))
            .try_fold(Money::zero(), |acc, s| s.and_then(|s| acc.checked_add(s)))
            .map(|_| ())
            .ok_or_else(|| too_large("cart total"))
    }
}

fn too_large(field: &str) -> CoreError {
    ValidationError::TooLarge {
        field: field.to_string(),
    }
    .into()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;
    use chrono::TimeZone;

    fn setup() -> (Catalog, Cart) {
        (Catalog::from_products(seed_products()).unwrap(), Cart::new())
    }

    fn stock(catalog: &Catalog, id: ProductId) -> i64 {
        catalog.find_by_id(id).unwrap().stock_quantity
    }

    #[test]
    fn test_add_reserves_stock() {
        let (mut catalog, mut cart) = setup();

        let line = cart.add_to_cart(&mut catalog, 2, 5).unwrap();
        assert_eq!(line.quantity, 5);
        assert_eq!(line.name, "Milk");

        assert_eq!(stock(&catalog, 2), 45);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_same_product_increments_line() {
        let (mut catalog, mut cart) = setup();

        cart.add_to_cart(&mut catalog, 1, 2).unwrap();
        cart.add_to_cart(&mut catalog, 1, 3).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 5);
        assert_eq!(stock(&catalog, 1), 95);
    }

    #[test]
    fn test_add_keeps_first_snapshot() {
        let (mut catalog, mut cart) = setup();

        cart.add_to_cart(&mut catalog, 1, 1).unwrap();
        catalog
            .update_product(1, "Green Apple", Money::from_major(70), 50)
            .unwrap();
        cart.add_to_cart(&mut catalog, 1, 1).unwrap();

        let line = cart.line(1).unwrap();
        assert_eq!(line.name, "Apple");
        assert_eq!(line.unit_price, Money::from_major(50));
        assert_eq!(line.quantity, 2);
        assert_eq!(stock(&catalog, 1), 49);
    }

    #[test]
    fn test_add_insufficient_stock_changes_nothing() {
        let (mut catalog, mut cart) = setup();

        let err = cart.add_to_cart(&mut catalog, 4, 500).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { product_id: 4, .. }));
        assert_eq!(stock(&catalog, 4), 200);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_exact_stock_empties_shelf() {
        let (mut catalog, mut cart) = setup();
        cart.add_to_cart(&mut catalog, 2, 50).unwrap();
        assert_eq!(stock(&catalog, 2), 0);

        let err = cart.add_to_cart(&mut catalog, 2, 1).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { available: 0, .. }));
        assert_eq!(cart.line(2).unwrap().quantity, 50);
    }

    #[test]
    fn test_add_unknown_product() {
        let (mut catalog, mut cart) = setup();
        assert_eq!(
            cart.add_to_cart(&mut catalog, 99, 1).unwrap_err(),
            CoreError::ProductNotFound(99)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let (mut catalog, mut cart) = setup();
        for qty in [0, -4] {
            let err = cart.add_to_cart(&mut catalog, 1, qty).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::MustBePositive { .. })
            ));
        }
        assert_eq!(stock(&catalog, 1), 100);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_view_empty_cart() {
        let cart = Cart::new();
        let view = cart.view();
        assert!(view.is_empty());
        assert!(view.total.is_zero());
    }

    #[test]
    fn test_view_total() {
        let (mut catalog, mut cart) = setup();
        cart.add_to_cart(&mut catalog, 1, 2).unwrap();
        cart.add_to_cart(&mut catalog, 3, 1).unwrap();

        let view = cart.view();
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.total, Money::from_major(130));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_add_then_remove_restores_stock() {
        let (mut catalog, mut cart) = setup();

        cart.add_to_cart(&mut catalog, 5, 7).unwrap();
        let removal = cart.remove_from_cart(&mut catalog, 5, 7).unwrap();

        assert!(removal.line_removed());
        assert!(removal.restock.restored);
        assert_eq!(stock(&catalog, 5), 150);
        assert!(cart.line(5).is_none());
    }

    #[test]
    fn test_partial_remove() {
        let (mut catalog, mut cart) = setup();
        cart.add_to_cart(&mut catalog, 1, 5).unwrap();

        let removal = cart.remove_from_cart(&mut catalog, 1, 2).unwrap();
        assert_eq!(removal.remaining, 3);
        assert_eq!(removal.restock.quantity, 2);
        assert_eq!(cart.line(1).unwrap().quantity, 3);
        assert_eq!(stock(&catalog, 1), 97);
    }

    #[test]
    fn test_over_remove_drops_whole_line() {
        let (mut catalog, mut cart) = setup();
        cart.add_to_cart(&mut catalog, 1, 3).unwrap();

        let removal = cart.remove_from_cart(&mut catalog, 1, 10).unwrap();
        assert!(removal.line_removed());
        assert_eq!(removal.restock.quantity, 3);
        assert!(cart.is_empty());
        assert_eq!(stock(&catalog, 1), 100);
    }

    #[test]
    fn test_remove_missing_line() {
        let (mut catalog, mut cart) = setup();
        assert_eq!(
            cart.remove_from_cart(&mut catalog, 1, 1).unwrap_err(),
            CoreError::CartLineNotFound(1)
        );
    }

    #[test]
    fn test_remove_rejects_non_positive_quantity() {
        let (mut catalog, mut cart) = setup();
        cart.add_to_cart(&mut catalog, 1, 3).unwrap();

        assert!(cart.remove_from_cart(&mut catalog, 1, 0).is_err());
        assert_eq!(cart.line(1).unwrap().quantity, 3);
        assert_eq!(stock(&catalog, 1), 97);
    }

    #[test]
    fn test_remove_after_product_deleted_skips_restock() {
        let (mut catalog, mut cart) = setup();
        cart.add_to_cart(&mut catalog, 3, 4).unwrap();
        catalog.delete_product(3).unwrap();

        let removal = cart.remove_from_cart(&mut catalog, 3, 4).unwrap();
        assert!(!removal.restock.restored);
        assert!(cart.is_empty());
        assert!(!catalog.contains(3));
    }

    #[test]
    fn test_clear_restores_everything() {
        let (mut catalog, mut cart) = setup();
        cart.add_to_cart(&mut catalog, 1, 10).unwrap();
        cart.add_to_cart(&mut catalog, 4, 20).unwrap();
        catalog.delete_product(4).unwrap();

        let restocks = cart.clear(&mut catalog);

        assert!(cart.is_empty());
        assert_eq!(stock(&catalog, 1), 100);
        assert_eq!(restocks.len(), 2);
        assert!(restocks[0].restored);
        assert!(!restocks[1].restored);
        assert_eq!(restocks[1].quantity, 20);
    }

    #[test]
    fn test_clear_empty_cart() {
        let (mut catalog, mut cart) = setup();
        assert!(cart.clear(&mut catalog).is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_records_bill_and_consumes_stock() {
        let (mut catalog, mut cart) = setup();
        let mut ledger = Ledger::new();

        cart.add_to_cart(&mut catalog, 1, 2).unwrap();
        cart.add_to_cart(&mut catalog, 3, 1).unwrap();

        let bill = cart.checkout(&mut ledger).unwrap();

        assert_eq!(bill.total, Money::from_major(130));
        assert_eq!(bill.lines.len(), 2);
        assert_eq!(bill.lines[0].subtotal, Money::from_major(100));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list_all()[0], bill);
        assert!(cart.is_empty());

        // Reservation consumed, not restored
        assert_eq!(stock(&catalog, 1), 98);
        assert_eq!(stock(&catalog, 3), 74);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = Cart::new();
        let mut ledger = Ledger::new();
        assert_eq!(cart.checkout(&mut ledger).unwrap_err(), CoreError::EmptyCart);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_checkout_uses_snapshot_after_product_deleted() {
        let (mut catalog, mut cart) = setup();
        let mut ledger = Ledger::new();

        cart.add_to_cart(&mut catalog, 5, 1).unwrap();
        catalog.delete_product(5).unwrap();

        let bill = cart.checkout(&mut ledger).unwrap();
        assert_eq!(bill.lines[0].name, "Rice");
        assert_eq!(bill.total, Money::from_major(100));
    }

    #[test]
    fn test_checkout_at_fixed_time() {
        let (mut catalog, mut cart) = setup();
        let mut ledger = Ledger::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 3, 7).unwrap();

        cart.add_to_cart(&mut catalog, 2, 1).unwrap();
        let bill = cart.checkout_at(&mut ledger, at).unwrap();

        assert_eq!(bill.created_at, at);
        assert_eq!(bill.timestamp(), "Mon Oct 19 14:03:07 2026");
        assert_eq!(ledger.list_all(), &[bill.clone()]);
        assert_eq!(ledger.list_all()[0].timestamp(), "Mon Oct 19 14:03:07 2026");
        assert_eq!(ledger.total_revenue(), Money::from_major(80));
    }

    #[test]
    fn test_add_rejects_line_that_overflows_total() {
        let mut catalog = Catalog::new();
        catalog
            .add_product(6, "Gold", Money::from_cents(9_223_372_036_854_758), 100_000)
            .unwrap();
        let mut cart = Cart::new();

        let err = cart.add_to_cart(&mut catalog, 6, 100_000).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::TooLarge {
                field: "cart total".to_string()
            })
        );

        // Nothing reserved, cart still viewable
        assert_eq!(stock(&catalog, 6), 100_000);
        assert!(cart.view().is_empty());
        assert!(cart.view().total.is_zero());
    }

    #[test]
    fn test_add_rejects_increment_that_overflows_total() {
        let mut catalog = Catalog::new();
        catalog
            .add_product(1, "Bar", Money::from_cents(i64::MAX / 4), 10)
            .unwrap();
        catalog.add_product(2, "Pin", Money::from_cents(1), 10).unwrap();
        let mut cart = Cart::new();

        cart.add_to_cart(&mut catalog, 1, 3).unwrap();
        cart.add_to_cart(&mut catalog, 2, 1).unwrap();

        let err = cart.add_to_cart(&mut catalog, 1, 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLarge { .. })
        ));
        assert_eq!(cart.line(1).unwrap().quantity, 3);
        assert_eq!(stock(&catalog, 1), 7);

        let view = cart.view();
        assert_eq!(view.total, Money::from_cents((i64::MAX / 4) * 3 + 1));
    }
}
