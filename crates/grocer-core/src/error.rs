//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocer-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog / cart / checkout rule violations      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal app errors (in app)                                          │
//! │  └── ApiError         - What the menu shows (code + message)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Menu                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, name, quantities)
//! 3. Errors are enum variants, never String
//! 4. Every failed operation leaves the store untouched

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// All of these are recoverable: the operation that produced one made no
/// change to the catalog, cart or ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A product with this id is already in the catalog.
    #[error("Product ID {id} already exists")]
    DuplicateId { id: ProductId },

    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - Id was never added
    /// - Product was deleted by an admin
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The cart holds no line for this product.
    #[error("Item not found in cart: {0}")]
    CartLineNotFound(ProductId),

    /// Insufficient stock to reserve the requested quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (Eggs, qty: 500)
    ///      │
    ///      ▼
    /// Check stock: available=200
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 4, name: "Eggs", available: 200, requested: 500 }
    ///      │
    ///      ▼
    /// Menu shows: "Not enough stock for Eggs: available 200, requested 500"
    /// ```
    #[error("Not enough stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout was attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value would not fit in an `i64` amount of cents.
    #[error("{field} is too large")]
    TooLarge { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: 4,
            name: "Eggs".to_string(),
            available: 200,
            requested: 500,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for Eggs: available 200, requested 500"
        );

        assert_eq!(
            CoreError::DuplicateId { id: 1 }.to_string(),
            "Product ID 1 already exists"
        );
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
        assert_eq!(
            CoreError::CartLineNotFound(9).to_string(),
            "Item not found in cart: 9"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "name must be at most 100 characters");

        let err = ValidationError::TooLarge {
            field: "cart total".to_string(),
        };
        assert_eq!(err.to_string(), "cart total is too large");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
