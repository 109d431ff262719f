//! # Validation Module
//!
//! Input validation utilities for Taiga.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (terminal)                                        │
//! │  ├── Command parsing (quantities, known products)                      │
//! │  └── Checkout name policy                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, called by constructors                          │
//! │  ├── Field-level rules (blank ids, price range, rate range)            │
//! │  └── Runs before any value is built                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The types themselves                                         │
//! │  └── Private fields: a constructed value cannot go invalid later       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use taiga_core::validation::{validate_price, validate_product_id};
//!
//! validate_product_id("P001").unwrap();
//! validate_price(15.0).unwrap();
//! ```

use crate::error::ValidationError;
use crate::DEFAULT_CATEGORY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use taiga_core::validation::validate_product_id;
///
/// assert!(validate_product_id("P001").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("   ").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use taiga_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Laptop Pro").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Normalizes a product category.
///
/// ## Rules
/// - Blank or whitespace-only categories become [`DEFAULT_CATEGORY`]
/// - Anything else is trimmed and kept as-is
/// - Never fails: a missing category is a defaulting case, not an error
///
/// ## Returns
/// The category to store.
///
/// ## Example
/// ```rust
/// use taiga_core::validation::normalize_category;
///
/// assert_eq!(normalize_category("Electronics"), "Electronics");
/// assert_eq!(normalize_category("  Kitchen  "), "Kitchen");
/// assert_eq!(normalize_category("   "), "General");
/// ```
pub fn normalize_category(category: &str) -> String {
    let category = category.trim();

    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in dollars.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Must be a finite number (NaN and infinities are rejected)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use taiga_core::validation::validate_price;
///
/// assert!(validate_price(10.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice { value: price });
    }

    Ok(())
}

/// Validates a discount rate given as a fraction.
///
/// ## Rules
/// - Must be between 0.0 and 1.0 inclusive
/// - 0.0 means no discount, 1.0 means free
///
/// ## Example
/// ```rust
/// use taiga_core::validation::validate_discount_rate;
///
/// assert!(validate_discount_rate(0.0).is_ok());
/// assert!(validate_discount_rate(0.2).is_ok());
/// assert!(validate_discount_rate(1.0).is_ok());
/// assert!(validate_discount_rate(1.5).is_err());
/// assert!(validate_discount_rate(-0.1).is_err());
/// ```
pub fn validate_discount_rate(rate: f64) -> ValidationResult<()> {
    // NaN fails the range check as well
    if !(0.0..=1.0).contains(&rate) {
        return Err(ValidationError::InvalidDiscountRate { value: rate });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("P001").is_ok());
        assert!(validate_product_id("laptop-1").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("\t\n").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop Pro").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Electronics"), "Electronics");
        assert_eq!(normalize_category("  Kitchen  "), "Kitchen");
        assert_eq!(normalize_category(""), DEFAULT_CATEGORY);
        assert_eq!(normalize_category("   "), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(10.99).is_ok());
        assert!(validate_price(1299.99).is_ok());

        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_discount_rate() {
        assert!(validate_discount_rate(0.0).is_ok());
        assert!(validate_discount_rate(0.2).is_ok());
        assert!(validate_discount_rate(1.0).is_ok());

        assert!(validate_discount_rate(-0.1).is_err());
        assert!(validate_discount_rate(1.01).is_err());
        assert!(validate_discount_rate(f64::NAN).is_err());
    }
}
