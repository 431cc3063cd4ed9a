//! # Domain Types
//!
//! Core domain types used throughout Grocer POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │      Bill       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │◄──│  product_id     │   │  id (UUID)      │       │
//! │  │  name           │   │  name (frozen)  │   │  created_at     │       │
//! │  │  unit_price     │   │  unit_price     │   │  lines          │       │
//! │  │  stock_quantity │   │  quantity >= 1  │   │  total          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │     Catalog owns          Cart owns             Ledger owns             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `CartLine` refers to its product by id only. The product may be
//! deleted while the line is still in the cart; every lookup through that
//! id is therefore fallible.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Externally assigned product identifier.
pub type ProductId = i64;

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, immutable identifier.
    pub id: ProductId,

    /// Display name shown in listings and on bills.
    pub name: String,

    /// Price of one unit.
    pub unit_price: Money,

    /// Units on the shelf, not counting units reserved by the cart.
    pub stock_quantity: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Money, stock_quantity: i64) -> Self {
        Product {
            id,
            name: name.into(),
            unit_price,
            stock_quantity,
        }
    }

    /// Presentation-only flag; has no effect on what can be sold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < LOW_STOCK_THRESHOLD
    }
}

/// A catalog row as shown by `list_products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    pub product: Product,
    pub low_stock: bool,
}

impl From<&Product> for ProductListing {
    fn from(product: &Product) -> Self {
        ProductListing {
            low_stock: product.is_low_stock(),
            product: product.clone(),
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart.
///
/// Uses the snapshot pattern: `name` and `unit_price` are frozen when the
/// line is first created and are not refreshed when more of the same
/// product is added later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Product name at time of adding (frozen).
    pub name: String,
    /// Unit price at time of adding (frozen).
    pub unit_price: Money,
    /// Reserved units, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line from the current state of a product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Read-only snapshot of the cart with its computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: Money,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Bill
// =============================================================================

/// One line of a finalized bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub subtotal: Money,
}

impl From<&CartLine> for BillLine {
    fn from(line: &CartLine) -> Self {
        BillLine {
            product_id: line.product_id,
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            subtotal: line.subtotal(),
        }
    }
}

/// A completed checkout. Immutable once recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<BillLine>,
    pub total: Money,
}

impl Bill {
    /// Builds a bill from cart lines, computing subtotals and the total.
    pub fn from_lines(lines: &[CartLine], created_at: DateTime<Utc>) -> Self {
        let lines: Vec<BillLine> = lines.iter().map(BillLine::from).collect();
        let total = lines.iter().map(|l| l.subtotal).sum();
        Bill {
            id: uuid::Uuid::new_v4().to_string(),
            created_at,
            lines,
            total,
        }
    }

    /// Timestamp in the classic `ctime` layout, e.g. `Mon Oct 19 14:03:07 2026`.
    pub fn timestamp(&self) -> String {
        self.created_at.format("%a %b %e %H:%M:%S %Y").to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
