//! # Error Types
//!
//! Domain-specific error types for taiga-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  taiga-core errors (this file)                                         │
//! │  ├── CoreError        - Domain/state rule violations                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Storefront errors (in app)                                            │
//! │  └── AppError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Errors raise at the point of violation; no retry or clamping

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain state failures.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order placement was attempted on an empty cart.
    ///
    /// ## When This Occurs
    /// - `Customer::place_order` called before anything was added
    /// - `place_order` called twice in a row (the first call clears the cart)
    ///
    /// The cart is left untouched; the caller may add items and retry.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when constructor input doesn't meet requirements.
/// Raised before any state is built, so a failed construction never leaves
/// a half-valid value behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Price is negative or not a finite number.
    #[error("price must be non-negative and finite, got {value}")]
    InvalidPrice { value: f64 },

    /// Discount rate is outside the [0, 1] fraction range.
    #[error("discount rate must be between 0 and 1, got {value}")]
    InvalidDiscountRate { value: f64 },

    /// An order was constructed with no line items.
    #[error("order must contain at least one line item")]
    EmptyLineItems,
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
        let err = CoreError::EmptyCart;
        assert_eq!(err.to_string(), "cannot place an order with an empty cart");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product id".to_string(),
        };
        assert_eq!(err.to_string(), "product id is required");

        let err = ValidationError::InvalidPrice { value: -1.5 };
        assert_eq!(
            err.to_string(),
            "price must be non-negative and finite, got -1.5"
        );

        let err = ValidationError::InvalidDiscountRate { value: 1.2 };
        assert_eq!(
            err.to_string(),
            "discount rate must be between 0 and 1, got 1.2"
        );
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
