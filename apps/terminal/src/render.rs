//! # Rendering
//!
//! Plain-text tables for the menu. Every function returns a `String` so the
//! menu decides where it goes.
//!
//! ```text
//! =======================================
//!    ID                Name     Price       Qty
//! ---------------------------------------
//!     1               Apple     50.00       100
//!     6             Saffron    900.00         2 <-- Low stock!
//! =======================================
//! ```

use std::fmt::Write as _;

use grocer_core::Money;

use crate::commands::cart::CartResponse;
use crate::commands::product::ProductDto;
use crate::commands::sale::BillResponse;

const RULE: &str = "=======================================";
const THIN_RULE: &str = "---------------------------------------";

fn product_header(out: &mut String) {
    let _ = writeln!(out, "{:>5}{:>20}{:>10}{:>10}", "ID", "Name", "Price", "Qty");
}

fn line_header(out: &mut String) {
    let _ = writeln!(
        out,
        "{:>5}{:>20}{:>10}{:>10}{:>12}",
        "ID", "Name", "Price", "Qty", "Subtotal"
    );
}

fn line_row(out: &mut String, id: i64, name: &str, price: i64, qty: i64, subtotal: i64) {
    let _ = writeln!(
        out,
        "{:>5}{:>20}{:>10}{:>10}{:>12}",
        id,
        name,
        Money::from_cents(price),
        qty,
        Money::from_cents(subtotal)
    );
}

/// Full catalog listing with low-stock markers.
pub fn product_table(products: &[ProductDto]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}");
    product_header(&mut out);
    let _ = writeln!(out, "{THIN_RULE}");
    for p in products {
        let _ = write!(
            out,
            "{:>5}{:>20}{:>10}{:>10}",
            p.id,
            p.name,
            p.price(),
            p.stock_quantity
        );
        if p.low_stock {
            out.push_str(" <-- Low stock!");
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Search results, without low-stock markers.
pub fn search_results(products: &[ProductDto]) -> String {
    let mut out = String::new();
    out.push_str("\n========= SEARCH RESULTS =========\n");
    product_header(&mut out);
    out.push_str("----------------------------------\n");
    for p in products {
        let _ = writeln!(
            out,
            "{:>5}{:>20}{:>10}{:>10}",
            p.id,
            p.name,
            p.price(),
            p.stock_quantity
        );
    }
    if products.is_empty() {
        out.push_str("No products found.\n");
    }
    out.push_str("==================================\n");
    out
}

/// The customer's cart with subtotals and the total.
pub fn cart_table(cart: &CartResponse) -> String {
    if cart.is_empty() {
        return "Cart is empty!\n".to_string();
    }

    let mut out = String::new();
    out.push_str("\n========= YOUR CART =========\n");
    line_header(&mut out);
    for item in &cart.items {
        line_row(
            &mut out,
            item.product_id,
            &item.name,
            item.unit_price_cents,
            item.quantity,
            item.subtotal_cents,
        );
    }
    out.push_str("-----------------------------\n");
    let _ = writeln!(out, "TOTAL: {}", Money::from_cents(cart.total_cents));
    out.push_str("=============================\n");
    out
}

/// A single bill as printed at checkout.
pub fn bill(bill: &BillResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "BILL [{}]:", bill.timestamp);
    line_header(&mut out);
    for item in &bill.items {
        line_row(
            &mut out,
            item.product_id,
            &item.name,
            item.unit_price_cents,
            item.quantity,
            item.subtotal_cents,
        );
    }
    let _ = writeln!(out, "TOTAL: {}", Money::from_cents(bill.total_cents));
    out
}

/// Every recorded bill, oldest first.
pub fn sales(bills: &[BillResponse]) -> String {
    let mut out = String::new();
    out.push_str("\n=========== SALES ===========\n");
    if bills.is_empty() {
        out.push_str("No sales yet.\n");
        return out;
    }
    for b in bills {
        out.push_str(&bill(b));
        out.push('\n');
    }
    out.push_str("=============================\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::CartItemDto;
    use crate::commands::sale::BillItemDto;

    fn product(id: i64, name: &str, price_cents: i64, stock: i64) -> ProductDto {
        ProductDto {
            id,
            name: name.to_string(),
            price_cents,
            stock_quantity: stock,
            low_stock: stock < 5,
        }
    }

    #[test]
    fn test_product_table() {
        let table = product_table(&[product(1, "Apple", 5000, 100), product(6, "Saffron", 90000, 2)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[2], "   ID                Name     Price       Qty");
        assert_eq!(lines[4], "    1               Apple     50.00       100");
        assert_eq!(
            lines[5],
            "    6             Saffron    900.00         2 <-- Low stock!"
        );
    }

    #[test]
    fn test_search_results_empty() {
        let out = search_results(&[]);
        assert!(out.contains("No products found."));
        assert!(!out.contains("Low stock"));
    }

    #[test]
    fn test_cart_table() {
        assert_eq!(cart_table(&CartResponse::from(grocer_core::CartView {
            lines: vec![],
            total: Money::zero(),
        })), "Cart is empty!\n");

        let cart = CartResponse {
            items: vec![CartItemDto {
                product_id: 3,
                name: "Bread".to_string(),
                unit_price_cents: 3000,
                quantity: 2,
                subtotal_cents: 6000,
            }],
            total_cents: 6000,
            item_count: 1,
            total_quantity: 2,
        };
        let out = cart_table(&cart);
        assert!(out.contains("    3               Bread     30.00         2       60.00\n"));
        assert!(out.contains("TOTAL: 60.00\n"));
    }

    #[test]
    fn test_bill_and_sales() {
        let b = BillResponse {
            id: "b-1".to_string(),
            timestamp: "Mon Oct 19 14:03:07 2026".to_string(),
            items: vec![BillItemDto {
                product_id: 1,
                name: "Apple".to_string(),
                unit_price_cents: 5000,
                quantity: 2,
                subtotal_cents: 10000,
            }],
            total_cents: 10000,
        };

        let out = bill(&b);
        assert!(out.starts_with("BILL [Mon Oct 19 14:03:07 2026]:\n"));
        assert!(out.ends_with("TOTAL: 100.00\n"));

        assert!(sales(&[]).contains("No sales yet."));
        assert!(sales(&[b]).contains("BILL [Mon Oct 19 14:03:07 2026]:"));
    }
}
