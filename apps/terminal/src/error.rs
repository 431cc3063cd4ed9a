//! # Error Types
//!
//! `ApiError` is what the command layer hands back to the menu when an
//! operation fails; `AppError` is what ends the whole program.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Grocer POS                             │
//! │                                                                         │
//! │  Menu                         Commands                                  │
//! │  ────                         ────────                                  │
//! │                                                                         │
//! │  "Add to Cart" (Eggs × 500)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::cart::add_to_cart → Result<CartResponse, ApiError>    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::InsufficientStock ─────────────────────► ApiError ──►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu prints the message and shows the menu again. Store unchanged.     │
//! │                                                                         │
//! │  Only I/O, configuration and seeding failures become AppError.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use grocer_core::CoreError;

use crate::state::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Not enough stock for Eggs: available 200, requested 500"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Product id already taken
    DuplicateId,

    /// Input validation failed
    ValidationError,

    /// Not enough units on the shelf
    InsufficientStock,

    /// Checkout on an empty cart
    EmptyCart,

    /// Wrong admin password
    Unauthorized,

    /// Internal error (serialization, etc.)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Wrong password!")
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::DuplicateId { .. } => ErrorCode::DuplicateId,
            CoreError::ProductNotFound(_) | CoreError::CartLineNotFound(_) => ErrorCode::NotFound,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::EmptyCart => ErrorCode::EmptyCart,
            CoreError::Validation(e) => return ApiError::validation(e.to_string()),
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Fatal errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not stock the seed catalog: {0}")]
    Seed(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::DuplicateId { id: 1 }.into();
        assert_eq!(err.code, ErrorCode::DuplicateId);
        assert_eq!(err.message, "Product ID 1 already exists");

        let err: ApiError = CoreError::CartLineNotFound(3).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_validation_message_is_unwrapped() {
        let err: ApiError = CoreError::from(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::InsufficientStock, "Not enough stock");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_STOCK");
        assert_eq!(json["message"], "Not enough stock");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::unauthorized().to_string(),
            "[Unauthorized] Wrong password!"
        );
    }
}
