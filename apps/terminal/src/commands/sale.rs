//! # Sale Commands
//!
//! Checkout and the admin's view of past sales.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer picks "Checkout"                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │  1. Cart empty?  ──yes──► ApiError EMPTY_CART                 │     │
//! │  │  2. Build Bill from cart lines (frozen names and prices)      │     │
//! │  │  3. Append Bill to ledger                                     │     │
//! │  │  4. Empty the cart (stock stays sold)                         │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  BillResponse printed to the customer                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use grocer_core::{Bill, BillLine, ProductId, Store};

use crate::error::ApiError;

/// One line of a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItemDto {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&BillLine> for BillItemDto {
    fn from(line: &BillLine) -> Self {
        BillItemDto {
            product_id: line.product_id,
            name: line.name.clone(),
            unit_price_cents: line.unit_price.cents(),
            quantity: line.quantity,
            subtotal_cents: line.subtotal.cents(),
        }
    }
}

/// A completed sale.
///
/// ## Serialization
/// ```json
/// {
///   "id": "6f1c…",
///   "timestamp": "Mon Oct 19 14:03:07 2026",
///   "items": [{ "productId": 1, "name": "Apple", "unitPriceCents": 5000, ... }],
///   "totalCents": 13000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub id: String,
    pub timestamp: String,
    pub items: Vec<BillItemDto>,
    pub total_cents: i64,
}

impl From<&Bill> for BillResponse {
    fn from(bill: &Bill) -> Self {
        BillResponse {
            id: bill.id.clone(),
            timestamp: bill.timestamp(),
            items: bill.lines.iter().map(BillItemDto::from).collect(),
            total_cents: bill.total.cents(),
        }
    }
}

/// Turns the cart into a recorded bill.
pub fn checkout(store: &mut Store) -> Result<BillResponse, ApiError> {
    debug!("checkout command");

    let bill = store.checkout()?;
    info!(
        bill_id = %bill.id,
        lines = bill.lines.len(),
        total = %bill.total,
        "Checkout completed"
    );

    Ok(BillResponse::from(&bill))
}

/// Every recorded bill, oldest first.
pub fn list_sales(store: &Store) -> Vec<BillResponse> {
    debug!("list_sales command");
    store.list_sales().iter().map(BillResponse::from).collect()
}

/// Pretty-printed JSON array of every recorded bill.
pub fn export_sales_json(store: &Store) -> Result<String, ApiError> {
    debug!("export_sales_json command");

    let sales = list_sales(store);
    let json = serde_json::to_string_pretty(&sales)
        .map_err(|e| ApiError::internal(format!("Failed to serialize sales: {e}")))?;

    info!(bills = sales.len(), bytes = json.len(), "Sales exported");
    Ok(json)
}
