//! # Catalog
//!
//! The authoritative set of sellable products and their stock.
//!
//! Products are kept in insertion order and addressed by id. Nothing outside
//! this module holds a reference into the table: callers look a product up,
//! decide what to do, and write the result back by id.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog                                                                │
//! │                                                                         │
//! │   admin:    add_product ── update_product ── delete_product             │
//! │   everyone: list_products ── find_by_id ── search_by_name               │
//! │   cart:     reserve (stock -= n)  ──  restock (stock += n, if present)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId, ProductListing};

/// Insertion-ordered product table keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog from products, rejecting duplicate ids.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let mut catalog = Catalog::new();
        for p in products {
            catalog.add_product(p.id, p.name, p.unit_price, p.stock_quantity)?;
        }
        Ok(catalog)
    }

    /// All products in insertion order, each flagged when low on stock.
    pub fn list_products(&self) -> Vec<ProductListing> {
        self.products.iter().map(ProductListing::from).collect()
    }

    /// Read-only view of the products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Adds a new product.
    ///
    /// Price and quantity are taken as given; see `validation` for callers
    /// that want to reject negative values.
    ///
    /// ## Errors
    /// `DuplicateId` if a product with `id` already exists.
    pub fn add_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        stock_quantity: i64,
    ) -> CoreResult<&Product> {
        if self.contains(id) {
            return Err(CoreError::DuplicateId { id });
        }

        self.products
            .push(Product::new(id, name, unit_price, stock_quantity));
        let idx = self.products.len() - 1;
        Ok(&self.products[idx])
    }

    /// Overwrites a product's name, price and stock in place.
    ///
    /// Stock is replaced, not adjusted, so any units currently reserved by
    /// the cart are no longer accounted for against the new figure.
    ///
    /// ## Errors
    /// `ProductNotFound` if no product has `id`.
    pub fn update_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        stock_quantity: i64,
    ) -> CoreResult<&Product> {
        let idx = self.position(id).ok_or(CoreError::ProductNotFound(id))?;

        let product = &mut self.products[idx];
        product.name = name.into();
        product.unit_price = unit_price;
        product.stock_quantity = stock_quantity;
        Ok(&*product)
    }

    /// Removes a product. Cart lines referring to it are left alone.
    ///
    /// ## Errors
    /// `ProductNotFound` if no product has `id`.
    pub fn delete_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let idx = self.position(id).ok_or(CoreError::ProductNotFound(id))?;
        Ok(self.products.remove(idx))
    }

    /// Looks a product up by id.
    pub fn find_by_id(&self, id: ProductId) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// Case-insensitive substring search over product names.
    ///
    /// An empty query matches every product. No match is an empty result,
    /// not an error.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::Store;
    ///
    /// let store = Store::seeded().unwrap();
    /// let hits = store.catalog().search_by_name("APPLE");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].name, "Apple");
    /// ```
    pub fn search_by_name(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Takes `qty` units off the shelf for the cart.
    ///
    /// Nothing changes unless the whole quantity is available.
    pub(crate) fn reserve(&mut self, id: ProductId, qty: i64) -> CoreResult<&Product> {
        let idx = self.position(id).ok_or(CoreError::ProductNotFound(id))?;
        let product = &mut self.products[idx];

        if qty > product.stock_quantity {
            return Err(CoreError::InsufficientStock {
                product_id: id,
                name: product.name.clone(),
                available: product.stock_quantity,
                requested: qty,
            });
        }

        product.stock_quantity -= qty;
        Ok(&*product)
    }

    /// Puts `qty` units back on the shelf.
    ///
    /// Returns `false` when the product no longer exists, in which case the
    /// units are simply dropped.
    pub(crate) fn restock(&mut self, id: ProductId, qty: i64) -> bool {
        match self.position(id) {
            Some(idx) => {
                let product = &mut self.products[idx];
                product.stock_quantity = product.stock_quantity.saturating_add(qty);
                true
            }
            None => false,
        }
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
