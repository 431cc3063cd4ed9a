//! # Validation Module
//!
//! Input validation utilities for Grocer POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu (terminal app)                                          │
//! │  ├── Re-prompt until a number is typed                                 │
//! │  └── Strict admin mode: reject negative prices / stock, empty names    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Core operations                                              │
//! │  ├── Cart quantities must be >= 1 (always enforced)                    │
//! │  └── Id uniqueness, existence, stock availability                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog itself accepts any price and stock an admin enters; the
//! product-field validators here are opt-in for callers that want to be
//! stricter.
//!
//! ## Usage
//! ```rust
//! use grocer_core::validation::{validate_quantity, validate_product_name};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert!(validate_product_name("Apple").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted by [`validate_product_name`].
pub const MAX_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add / Remove Item                                                │
/// │                                                                         │
/// │  User enters quantity: 0                                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(0) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       └── OK → Proceed with the cart operation                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Example
/// ```rust
/// use grocer_core::money::Money;
/// use grocer_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());           // Free item
/// assert!(validate_price(Money::from_cents(-100)).is_err()); // Invalid
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed (sold out).
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Runs every product-field validator at once.
pub fn validate_product_fields(name: &str, price: Money, stock: i64) -> ValidationResult<()> {
    validate_product_name(name)?;
    validate_price(price)?;
    validate_stock_quantity(stock)
}

// =============================================================================
// Unit Tests
// =============================================================================
