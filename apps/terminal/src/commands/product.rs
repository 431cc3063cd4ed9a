//! # Product Commands
//!
//! Catalog listing and search for everyone, add/update/delete for admins.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use grocer_core::validation::validate_product_fields;
use grocer_core::{Money, Product, ProductId, ProductListing, Store};

use crate::error::ApiError;

/// Product DTO for the menu and the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub price_cents: i64,
    pub stock_quantity: i64,
    /// Fewer than 5 units left
    pub low_stock: bool,
}

impl ProductDto {
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name.clone(),
            price_cents: p.unit_price.cents(),
            stock_quantity: p.stock_quantity,
            low_stock: p.is_low_stock(),
        }
    }
}

impl From<ProductListing> for ProductDto {
    fn from(listing: ProductListing) -> Self {
        ProductDto {
            low_stock: listing.low_stock,
            ..ProductDto::from(&listing.product)
        }
    }
}

/// Fields an admin types in for add/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub stock_quantity: i64,
}

impl ProductInput {
    /// Applies the strict-mode checks when `strict` is set.
    fn check(&self, strict: bool) -> Result<(), ApiError> {
        if strict {
            validate_product_fields(&self.name, self.price, self.stock_quantity)
                .map_err(|e| ApiError::validation(e.to_string()))?;
        }
        Ok(())
    }
}

/// All products in catalog order.
pub fn list_products(store: &Store) -> Vec<ProductDto> {
    debug!("list_products command");
    store
        .list_products()
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

/// Looks up a single product.
pub fn get_product(store: &Store, id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(id, "get_product command");
    Ok(ProductDto::from(store.find_product(id)?))
}

/// Whether a product id is already taken.
pub fn product_exists(store: &Store, id: ProductId) -> bool {
    store.catalog().contains(id)
}

/// Case-insensitive name search. No match returns an empty list.
pub fn search_products(store: &Store, query: &str) -> Vec<ProductDto> {
    debug!(query = %query, "search_products command");

    let results: Vec<ProductDto> = store
        .search_products(query)
        .into_iter()
        .map(ProductDto::from)
        .collect();

    debug!(query = %query, count = results.len(), "Search completed");
    results
}

/// Adds a product to the catalog.
pub fn add_product(
    store: &mut Store,
    input: ProductInput,
    strict: bool,
) -> Result<ProductDto, ApiError> {
    debug!(id = input.id, name = %input.name, strict, "add_product command");
    input.check(strict)?;

    let product = store.add_product(input.id, input.name, input.price, input.stock_quantity)?;

    info!(id = product.id, name = %product.name, price = %product.unit_price, stock = product.stock_quantity, "Product added");
    Ok(ProductDto::from(product))
}

/// Overwrites an existing product's name, price and stock.
pub fn update_product(
    store: &mut Store,
    input: ProductInput,
    strict: bool,
) -> Result<ProductDto, ApiError> {
    debug!(id = input.id, name = %input.name, strict, "update_product command");
    input.check(strict)?;

    let reserved = store.cart().line(input.id).map(|l| l.quantity).unwrap_or(0);
    let product =
        store.update_product(input.id, input.name, input.price, input.stock_quantity)?;

    info!(id = product.id, name = %product.name, stock = product.stock_quantity, reserved_in_cart = reserved, "Product updated");
    Ok(ProductDto::from(product))
}

/// Removes a product from the catalog.
pub fn delete_product(store: &mut Store, id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(id, "delete_product command");

    let removed = store.delete_product(id)?;
    if store.cart().line(id).is_some() {
        warn!(id, "Deleted product still has units in the cart");
    }

    info!(id, name = %removed.name, "Product deleted");
    Ok(ProductDto::from(&removed))
}
