//! # Ledger
//!
//! Append-only history of completed checkouts.
//!
//! Bills cannot be edited or removed once recorded.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Bill;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    bills: Vec<Bill>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Appends a bill. No deduplication, no size limit.
    pub fn record(&mut self, bill: Bill) -> &Bill {
        self.bills.push(bill);
        let idx = self.bills.len() - 1;
        &self.bills[idx]
    }

    /// Every recorded bill, oldest first.
    pub fn list_all(&self) -> &[Bill] {
        &self.bills
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// Sum of all bill totals, clamped to the `Money` range.
    pub fn total_revenue(&self) -> Money {
        self.bills
            .iter()
            .fold(Money::zero(), |acc, b| acc.saturating_add(b.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CartLine, Product};
    use chrono::Utc;

    fn bill_for(price: i64, qty: i64) -> Bill {
        let product = Product::new(1, "Apple", Money::from_major(price), 100);
        Bill::from_lines(&[CartLine::from_product(&product, qty)], Utc::now())
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert!(ledger.list_all().is_empty());
        assert!(ledger.total_revenue().is_zero());
    }

    #[test]
    fn test_record_keeps_order() {
        let mut ledger = Ledger::new();
        let first = bill_for(50, 1);
        let second = bill_for(10, 3);
        let first_id = first.id.clone();
        let second_id = second.id.clone();

        ledger.record(first);
        ledger.record(second);

        let ids: Vec<&str> = ledger.list_all().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec![first_id.as_str(), second_id.as_str()]);
        assert_eq!(ledger.total_revenue(), Money::from_major(80));
    }

    #[test]
    fn test_record_does_not_dedupe() {
        let mut ledger = Ledger::new();
        let bill = bill_for(50, 1);
        ledger.record(bill.clone());
        ledger.record(bill);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_total_revenue_saturates() {
        let product = Product::new(9, "Vault", Money::from_cents(i64::MAX / 2 + 1), 2);
        let line = CartLine::from_product(&product, 1);

        let mut ledger = Ledger::new();
        ledger.record(Bill::from_lines(&[line.clone()], Utc::now()));
        ledger.record(Bill::from_lines(&[line], Utc::now()));

        assert_eq!(ledger.total_revenue(), Money::from_cents(i64::MAX));
    }
}
