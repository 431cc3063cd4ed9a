//! # Seed Data
//!
//! The fixed starting inventory loaded at startup.
//!
//! | ID | Name  | Price  | Stock |
//! |----|-------|--------|-------|
//! | 1  | Apple |  50.00 | 100   |
//! | 2  | Milk  |  80.00 | 50    |
//! | 3  | Bread |  30.00 | 75    |
//! | 4  | Eggs  |  10.00 | 200   |
//! | 5  | Rice  | 100.00 | 150   |

use crate::money::Money;
use crate::types::Product;

/// (id, name, price in major units, stock)
const SEED: &[(i64, &str, i64, i64)] = &[
    (1, "Apple", 50, 100),
    (2, "Milk", 80, 50),
    (3, "Bread", 30, 75),
    (4, "Eggs", 10, 200),
    (5, "Rice", 100, 150),
];

/// Fresh copies of the seed products, in id order.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, price, stock)| Product::new(id, name, Money::from_major(price), stock))
        .collect()
}
