//! # Product Module
//!
//! Catalog products and their discount pricing.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌───────────────────────┐        ┌───────────────────────┐            │
//! │  │       Product         │        │     DiscountRate      │            │
//! │  │  ───────────────────  │        │  ───────────────────  │            │
//! │  │  id        (identity) │        │  fraction (f64)       │            │
//! │  │  name                 │◄───────│  0.2 = 20% off        │            │
//! │  │  category             │        └───────────────────────┘            │
//! │  │  price     (Money)    │                                             │
//! │  │  discount_rate        │   effective_price = price × (1 − rate)     │
//! │  └───────────────────────┘                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Product equality and hashing follow the `id` field ALONE. Two products
//! with the same id are the same product to the cart, even if their other
//! fields differ. This is what makes quantity aggregation work: the cart
//! finds "the line for this product" purely by id.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    normalize_category, validate_discount_rate, validate_price, validate_product_id,
    validate_product_name,
};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented as a fraction of the list price.
///
/// ## Why a Fraction?
/// 0.2 means 20% off: the effective price is `price × (1 − 0.2)`.
/// 0.0 means no discount, 1.0 means free.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Creates a discount rate from a fraction.
    ///
    /// Range checking happens in the product constructors; see
    /// [`crate::validation::validate_discount_rate`].
    #[inline]
    pub const fn from_fraction(fraction: f64) -> Self {
        DiscountRate(fraction)
    }

    /// Returns the rate as a fraction (0.2 for 20% off).
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0.0)
    }

    /// Checks if the discount rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

/// Display renders the rate as a percentage: `20%`, `12.5%`.
///
/// The two-decimal rendering is trimmed of trailing zeros so whole
/// percentages stay whole even when the arithmetic is inexact (0.29
/// times 100 lands just below 29 in binary doubles).
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = format!("{:.2}", self.percent());
        let pct = pct.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{}%", pct)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
///
/// Fields are private: a product is built through the validating
/// constructors and cannot be mutated afterwards. Carts and orders hold
/// clones, so a product in an order snapshot stays what it was at
/// placement time.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Catalog identifier; the sole carrier of product identity.
    id: String,

    /// Display name shown in listings and on receipts.
    name: String,

    /// Grouping label; blank input becomes [`crate::DEFAULT_CATEGORY`].
    category: String,

    /// List price before discount.
    price: Money,

    /// Fractional discount applied to the list price.
    discount_rate: DiscountRate,
}

impl Product {
    /// Creates a product with no discount.
    ///
    /// ## Rules
    /// - `id` and `name` must not be blank
    /// - `price` must be finite and >= 0
    /// - A blank `category` is stored as [`crate::DEFAULT_CATEGORY`]
    ///
    /// ## Example
    /// ```rust
    /// use taiga_core::product::Product;
    ///
    /// let laptop = Product::new("P001", "Laptop Pro", "Electronics", 1299.99).unwrap();
    /// assert_eq!(laptop.price().to_string(), "$1299.99");
    ///
    /// assert!(Product::new("", "Laptop Pro", "Electronics", 1299.99).is_err());
    /// assert!(Product::new("P001", "Laptop Pro", "Electronics", -1.0).is_err());
    /// ```
    pub fn new(id: &str, name: &str, category: &str, price: f64) -> Result<Self, ValidationError> {
        Self::with_discount(id, name, category, price, 0.0)
    }

    /// Creates a product with a fractional discount rate.
    ///
    /// ## Example
    /// ```rust
    /// use taiga_core::product::Product;
    ///
    /// let mug = Product::with_discount("P003", "Java Mug", "Kitchen", 15.0, 0.2).unwrap();
    /// assert_eq!(mug.effective_price().to_string(), "$12.00");
    ///
    /// assert!(Product::with_discount("P003", "Java Mug", "Kitchen", 15.0, 1.5).is_err());
    /// ```
    pub fn with_discount(
        id: &str,
        name: &str,
        category: &str,
        price: f64,
        discount_rate: f64,
    ) -> Result<Self, ValidationError> {
        validate_product_id(id)?;
        validate_product_name(name)?;
        validate_price(price)?;
        validate_discount_rate(discount_rate)?;

        Ok(Product {
            id: id.to_string(),
            name: name.to_string(),
            category: normalize_category(category),
            price: Money::from_dollars(price),
            discount_rate: DiscountRate::from_fraction(discount_rate),
        })
    }

    /// Returns the catalog identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category label.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the list price before discount.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the discount rate.
    #[inline]
    pub fn discount_rate(&self) -> DiscountRate {
        self.discount_rate
    }

    /// Checks whether a discount applies to this product.
    #[inline]
    pub fn has_discount(&self) -> bool {
        !self.discount_rate.is_zero()
    }

    /// Returns the price after discount.
    ///
    /// ## Example
    /// ```rust
    /// use taiga_core::product::Product;
    ///
    /// let lamp = Product::with_discount("P006", "Desk Lamp", "Office", 45.0, 0.15).unwrap();
    /// assert_eq!(lamp.effective_price().amount(), 38.25);
    /// ```
    pub fn effective_price(&self) -> Money {
        Money::from_dollars(self.price.amount() * (1.0 - self.discount_rate.fraction()))
    }
}

// =============================================================================
// Identity Implementations
// =============================================================================

/// Equality follows the id alone; see the module docs.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

/// Hash follows the id alone, consistent with `PartialEq`.
impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Display shows the listing form: name and list price.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
