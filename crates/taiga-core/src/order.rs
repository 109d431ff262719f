//! # Order Module
//!
//! Immutable order records produced from cart snapshots.
//!
//! ## The Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Cart (live, mutable)          Order (frozen at placement)            │
//! │   ────────────────────          ────────────────────────────            │
//! │   lines ──── deep copy ───────► lines      (never change)              │
//! │   total() recomputed            total      (computed once, stored)     │
//! │   subtotal() recomputed         subtotal   (computed once, stored)     │
//! │                                 placed_at  (stamped once)              │
//! │                                                                         │
//! │   Mutating the cart after placement cannot touch the order.            │
//! │   An order is a terminal state: no cancel, no edit.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are stored, not recomputed, so the order reports the same
//! figures forever even if pricing logic changes in a later release.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cart::LineItem;
use crate::error::ValidationError;
use crate::ids::IdGenerator;
use crate::money::Money;
use crate::receipt;

// =============================================================================
// Order
// =============================================================================

/// A placed order: a frozen snapshot of who bought what, at which prices.
///
/// All fields are private and there are no mutating methods. Once
/// constructed, an order never changes.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Order identifier, generated at placement.
    id: String,

    /// Id of the placing customer, frozen at placement.
    customer_id: String,

    /// Name of the placing customer, frozen at placement.
    customer_name: String,

    /// Deep copy of the cart lines, in insertion order.
    lines: Vec<LineItem>,

    /// Sum of line totals at list prices, computed once.
    subtotal: Money,

    /// Sum of line totals at effective prices, computed once.
    total: Money,

    /// When the order was placed.
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from a cart snapshot.
    ///
    /// ## Rules
    /// - `lines` must not be empty; an order with nothing in it fails with
    ///   [`ValidationError::EmptyLineItems`]
    /// - Totals are computed here, once, and stored
    ///
    /// `Customer::place_order` is the normal entry point; it guards the
    /// empty cart before this runs. The check here keeps `Order::new`
    /// honest for any other caller holding a snapshot.
    pub fn new(
        customer_id: String,
        customer_name: String,
        lines: Vec<LineItem>,
        ids: &dyn IdGenerator,
    ) -> Result<Self, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::EmptyLineItems);
        }

        let subtotal = lines.iter().map(LineItem::undiscounted_total).sum();
        let total = lines.iter().map(LineItem::line_total).sum();

        Ok(Order {
            id: ids.generate(),
            customer_id,
            customer_name,
            lines,
            subtotal,
            total,
            placed_at: Utc::now(),
        })
    }

    /// Returns the order identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the id of the customer who placed the order.
    #[inline]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Returns the customer name as it was at placement.
    #[inline]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the frozen lines, in cart insertion order.
    #[inline]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Returns the frozen pre-discount total.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Returns the frozen order total.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Returns the amount saved by discounts (subtotal minus total).
    pub fn savings(&self) -> Money {
        self.subtotal - self.total
    }

    /// Returns when the order was placed.
    #[inline]
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Renders the order as a fixed-width text receipt.
    ///
    /// The receipt is a pure function of frozen order state: calling this
    /// twice yields byte-identical strings.
    pub fn generate_receipt(&self) -> String {
        receipt::render(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::ids::SequentialIds;
    use crate::product::Product;

    fn sample_lines() -> Vec<LineItem> {
        let laptop = Product::new("P001", "Laptop Pro", "Electronics", 1299.99).unwrap();
        let mug = Product::with_discount("P003", "Java Mug", "Kitchen", 15.0, 0.2).unwrap();

        let mut cart = Cart::new();
        cart.add(&laptop);
        cart.add(&mug);
        cart.add(&mug);
        cart.snapshot()
    }

    #[test]
    fn test_order_freezes_totals_and_identity() {
        let ids = SequentialIds::new("ORD");
        let order = Order::new("C-1".to_string(), "Alice".to_string(), sample_lines(), &ids)
            .unwrap();

        assert_eq!(order.id(), "ORD-1");
        assert_eq!(order.customer_id(), "C-1");
        assert_eq!(order.customer_name(), "Alice");
        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.total(), Money::from_dollars(1323.99));
        assert_eq!(order.subtotal(), Money::from_dollars(1329.99));
        assert_eq!(order.savings(), Money::from_dollars(6.0));
    }

    #[test]
    fn test_order_rejects_empty_lines() {
        let ids = SequentialIds::new("ORD");
        let result = Order::new("C-1".to_string(), "Alice".to_string(), Vec::new(), &ids);

        assert!(matches!(result, Err(ValidationError::EmptyLineItems)));
    }

    #[test]
    fn test_order_serializes_to_json() {
        let ids = SequentialIds::new("ORD");
        let order = Order::new("C-1".to_string(), "Alice".to_string(), sample_lines(), &ids)
            .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "ORD-1");
        assert_eq!(json["customer_name"], "Alice");
        assert_eq!(json["total"], 1323.99);
        assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    }
}
