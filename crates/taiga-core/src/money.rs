//! # Money Module
//!
//! Provides the `Money` type for handling monetary values.
//!
//! ## The Display Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DOUBLES IN, DOLLARS OUT                                                │
//! │                                                                         │
//! │  Catalog prices are IEEE-754 doubles, and every derived amount         │
//! │  (line totals, subtotals, savings, order totals) is the exact          │
//! │  double-precision result of the pricing arithmetic:                    │
//! │                                                                         │
//! │    1299.99 + 2 × 12.00 = 1323.99   (exact in f64)                      │
//! │                                                                         │
//! │  Rounding happens exactly ONCE, in Display: `{:.2}` renders the        │
//! │  stored value to two decimals (ties round to even). No intermediate    │
//! │  value is ever rounded, so totals never drift from their lines.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use taiga_core::money::Money;
//!
//! let price = Money::from_dollars(10.99);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // $21.98
//! let total = price + Money::from_dollars(5.00);  // $15.99
//!
//! assert_eq!(doubled.to_string(), "$21.98");
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in dollars.
///
/// ## Design Decisions
/// - **f64 amount**: prices and totals are double-precision end to end;
///   rounding is a display concern, never a storage concern
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **Serialize only**: values enter the system through validated
///   constructors, never through deserialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► Product.effective_price ──► LineItem.line_total     │
/// │                                                                         │
/// │  Cart.subtotal ──► Cart.savings ──► Cart.total ──► Order.total (frozen)│
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from a dollar amount.
    ///
    /// ## Example
    /// ```rust
    /// use taiga_core::money::Money;
    ///
    /// let price = Money::from_dollars(1299.99);
    /// assert_eq!(price.amount(), 1299.99);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: f64) -> Self {
        Money(dollars)
    }

    /// Returns the raw dollar amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use taiga_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money rounded to two decimals.
///
/// This is the single place where amounts are rounded. `{:.2}` rounds the
/// exact stored double with ties to even, so `0.125` renders as `$0.12`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity (for line total calculations).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * f64::from(qty))
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars() {
        let money = Money::from_dollars(10.99);
        assert_eq!(money.amount(), 10.99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_dollars(10.99)), "$10.99");
        assert_eq!(format!("{}", Money::from_dollars(5.0)), "$5.00");
        assert_eq!(format!("{}", Money::from_dollars(-5.5)), "-$5.50");
        assert_eq!(format!("{}", Money::from_dollars(0.0)), "$0.00");
        assert_eq!(format!("{}", Money::from_dollars(1299.99)), "$1299.99");
    }

    /// Pins the display rounding mode: ties round to even on the exact
    /// stored double. 0.125 and 0.375 are exactly representable, so both
    /// are true ties; one rounds down to even, the other up to even.
    #[test]
    fn test_display_rounds_ties_to_even() {
        assert_eq!(format!("{}", Money::from_dollars(0.125)), "$0.12");
        assert_eq!(format!("{}", Money::from_dollars(0.375)), "$0.38");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dollars(10.0);
        let b = Money::from_dollars(5.0);

        assert_eq!((a + b).amount(), 15.0);
        assert_eq!((a - b).amount(), 5.0);
        assert_eq!((a * 3).amount(), 30.0);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.amount(), 15.0);
    }

    /// The flagship pricing sum is exact in double precision.
    #[test]
    fn test_sum_is_exact_double_arithmetic() {
        let total: Money = [
            Money::from_dollars(1299.99),
            Money::from_dollars(12.0) * 2,
        ]
        .into_iter()
        .sum();

        assert_eq!(total.amount(), 1323.99);
        assert_eq!(total.to_string(), "$1323.99");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_dollars(1.0);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());

        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert!(total.is_zero());
    }
}
