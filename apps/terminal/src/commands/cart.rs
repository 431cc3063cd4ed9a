//! # Cart Commands
//!
//! Commands for the customer's cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐                      ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │─────────────────────►│   Bill   │       │
//! │  │  Cart    │     │          │      checkout        │ recorded │       │
//! │  └──────────┘     └──────────┘      (sale.rs)       └──────────┘       │
//! │                        │                                                │
//! │                   add_to_cart      (stock reserved)                    │
//! │                   remove_from_cart (stock restored)                    │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use grocer_core::{CartLine, CartView, ProductId, Restock, Store};

use crate::error::ApiError;

/// One cart line with its subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&CartLine> for CartItemDto {
    fn from(line: &CartLine) -> Self {
        CartItemDto {
            product_id: line.product_id,
            name: line.name.clone(),
            unit_price_cents: line.unit_price.cents(),
            quantity: line.quantity,
            subtotal_cents: line.subtotal().cents(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItemDto>,
    pub total_cents: i64,
    /// Number of distinct lines
    pub item_count: usize,
    /// Sum of quantities across lines
    pub total_quantity: i64,
}

impl CartResponse {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        let items: Vec<CartItemDto> = view.lines.iter().map(CartItemDto::from).collect();
        CartResponse {
            item_count: items.len(),
            total_quantity: items.iter().map(|i| i.quantity).sum(),
            total_cents: view.total.cents(),
            items,
        }
    }
}

impl From<&Store> for CartResponse {
    fn from(store: &Store) -> Self {
        CartResponse::from(store.view_cart())
    }
}

/// Outcome of a removal, with the cart as it stands afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartResponse {
    /// Units taken out of the cart
    pub removed: i64,
    /// Units still in the cart for this product
    pub remaining: i64,
    /// Whether the units went back on the shelf
    pub restocked: bool,
    pub cart: CartResponse,
}

/// Gets the current cart contents.
pub fn get_cart(store: &Store) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(store)
}

/// Adds units of a product to the cart, reserving them from stock.
///
/// ## Behavior
/// - If product already in cart: quantity increases, name and price stay as first added
/// - If product not in cart: added as new line
/// - Not enough stock: nothing changes
///
/// ## Returns
/// Updated cart with all items and the total
pub fn add_to_cart(
    store: &mut Store,
    product_id: ProductId,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, quantity, "add_to_cart command");

    let line = store.add_to_cart(product_id, quantity)?;
    info!(product_id, added = quantity, in_cart = line.quantity, "Added to cart");

    Ok(CartResponse::from(&*store))
}

/// Units of a product currently in the cart.
pub fn cart_line_quantity(store: &Store, product_id: ProductId) -> Result<i64, ApiError> {
    store
        .cart()
        .line(product_id)
        .map(|line| line.quantity)
        .ok_or_else(|| grocer_core::CoreError::CartLineNotFound(product_id).into())
}

/// Removes units of a product from the cart.
///
/// Asking for more than the line holds removes the whole line.
pub fn remove_from_cart(
    store: &mut Store,
    product_id: ProductId,
    quantity: i64,
) -> Result<RemoveFromCartResponse, ApiError> {
    debug!(product_id, quantity, "remove_from_cart command");

    let removal = store.remove_from_cart(product_id, quantity)?;
    log_restock(&removal.restock);
    info!(
        product_id,
        removed = removal.restock.quantity,
        remaining = removal.remaining,
        "Removed from cart"
    );

    Ok(RemoveFromCartResponse {
        removed: removal.restock.quantity,
        remaining: removal.remaining,
        restocked: removal.restock.restored,
        cart: CartResponse::from(&*store),
    })
}

/// Empties the cart, returning every reserved unit to stock.
pub fn clear_cart(store: &mut Store) -> CartResponse {
    debug!("clear_cart command");

    let restocks = store.clear_cart();
    for restock in &restocks {
        log_restock(restock);
    }
    info!(lines = restocks.len(), "Cart cleared");

    CartResponse::from(&*store)
}

fn log_restock(restock: &Restock) {
    if !restock.restored {
        warn!(
            product_id = restock.product_id,
            quantity = restock.quantity,
            "Product no longer in catalog, units not restocked"
        );
    }
}
