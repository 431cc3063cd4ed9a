//! # Store
//!
//! The single aggregate that owns all mutable state for one run.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │   ┌──────────────┐     ┌──────────────┐     ┌──────────────┐           │
//! │   │   Catalog    │◄────│     Cart     │────►│    Ledger    │           │
//! │   │  products +  │ &mut│  lines keyed │ &mut│  bills, in   │           │
//! │   │  stock       │     │  by product  │     │  order       │           │
//! │   └──────────────┘     └──────────────┘     └──────────────┘           │
//! │                                                                         │
//! │   Constructed once at startup and handed to the menu layer.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three parts are separate fields so the cart can borrow the catalog
//! (or the ledger) mutably while it is itself borrowed mutably.

use crate::cart::{Cart, Removal, Restock};
use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::seed::seed_products;
use crate::types::{Bill, CartLine, CartView, Product, ProductId, ProductListing};

#[derive(Debug, Clone, Default)]
pub struct Store {
    catalog: Catalog,
    cart: Cart,
    ledger: Ledger,
}

impl Store {
    /// A store with no products, an empty cart and no sales.
    pub fn new() -> Self {
        Store::default()
    }

    /// A store around an existing catalog, with an empty cart and no sales.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Store {
            catalog,
            ..Store::default()
        }
    }

    /// A store stocked with the five seed products.
    ///
    /// The only possible error is `DuplicateId`, which would mean the seed
    /// table repeats an id; `seed::tests::test_seed_ids_are_distinct` keeps
    /// that from happening.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::Store;
    ///
    /// let store = Store::seeded().unwrap();
    /// assert_eq!(store.list_products().len(), 5);
    /// assert!(store.view_cart().is_empty());
    /// assert!(store.list_sales().is_empty());
    /// ```
    pub fn seeded() -> CoreResult<Self> {
        Ok(Store::with_catalog(Catalog::from_products(seed_products())?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    pub fn list_products(&self) -> Vec<ProductListing> {
        self.catalog.list_products()
    }

    pub fn add_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        stock_quantity: i64,
    ) -> CoreResult<&Product> {
        self.catalog.add_product(id, name, unit_price, stock_quantity)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        stock_quantity: i64,
    ) -> CoreResult<&Product> {
        self.catalog
            .update_product(id, name, unit_price, stock_quantity)
    }

    pub fn delete_product(&mut self, id: ProductId) -> CoreResult<Product> {
        self.catalog.delete_product(id)
    }

    pub fn find_product(&self, id: ProductId) -> CoreResult<&Product> {
        self.catalog.find_by_id(id)
    }

    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        self.catalog.search_by_name(query)
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: i64) -> CoreResult<&CartLine> {
        self.cart
            .add_to_cart(&mut self.catalog, product_id, quantity)
    }

    pub fn view_cart(&self) -> CartView {
        self.cart.view()
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId, quantity: i64) -> CoreResult<Removal> {
        self.cart
            .remove_from_cart(&mut self.catalog, product_id, quantity)
    }

    pub fn clear_cart(&mut self) -> Vec<Restock> {
        self.cart.clear(&mut self.catalog)
    }

    pub fn checkout(&mut self) -> CoreResult<Bill> {
        self.cart.checkout(&mut self.ledger)
    }

    // -------------------------------------------------------------------------
    // Ledger
    // -------------------------------------------------------------------------

    pub fn list_sales(&self) -> &[Bill] {
        self.ledger.list_all()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
//
// End-to-end properties across catalog, cart and ledger.
