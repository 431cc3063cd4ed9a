//! # grocer-core: Pure Business Logic for Grocer POS
//!
//! This crate is the **heart** of Grocer POS. It keeps stock, cart contents
//! and sales records consistent with each other, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocer POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Text Menu (apps/terminal)                    │   │
//! │  │    Admin: products, sales   ──   Customer: cart, checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command layer                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  ledger   │  │   money   │  │   │
//! │  │   │  Product  │  │ CartLine  │  │   Bill    │  │   Money   │  │   │
//! │  │   │  stock    │  │ reserve   │  │  append   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • ONE STORE AGGREGATE                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Products and their stock levels
//! - [`cart`] - Customer selection; reserves stock on add
//! - [`ledger`] - Append-only record of bills
//! - [`store`] - The aggregate owning catalog, cart and ledger
//! - [`auth`] - Shared admin secret check
//! - [`types`] - Domain types (Product, CartLine, Bill, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//! - [`seed`] - Starting inventory
//!
//! ## Design Principles
//!
//! 1. **No I/O**: Terminal, environment and file system access are FORBIDDEN here
//! 2. **Integer Money**: All monetary values are in cents (i64)
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Lookups, not aliases**: Cart and catalog refer to each other by id only
//!
//! ## Example Usage
//!
//! ```rust
//! use grocer_core::{CoreError, Money, Store};
//!
//! let mut store = Store::seeded().unwrap();
//!
//! store.add_to_cart(1, 2).unwrap(); // 2 × Apple @ 50.00
//! store.add_to_cart(3, 1).unwrap(); // 1 × Bread @ 30.00
//!
//! let bill = store.checkout().unwrap();
//! assert_eq!(bill.total, Money::from_major(130));
//! assert_eq!(store.list_sales().len(), 1);
//!
//! assert_eq!(store.checkout().unwrap_err(), CoreError::EmptyCart);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use grocer_core::Money` instead of
// `use grocer_core::money::Money`

pub use auth::AdminAuth;
pub use cart::{Cart, Removal, Restock};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use store::Store;
pub use types::*;
