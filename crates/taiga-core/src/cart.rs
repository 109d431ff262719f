//! # Cart Module
//!
//! The mutable shopping cart and its line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  Caller Action            Cart Change                                   │
//! │  ─────────────            ───────────                                   │
//! │                                                                         │
//! │  add(product) ──────────► existing line? quantity += 1                 │
//! │                           otherwise       lines.push(qty 1)            │
//! │                                                                         │
//! │  remove(product) ───────► whole line dropped (any quantity)            │
//! │                           absent product: silent no-op                 │
//! │                                                                         │
//! │  clear() ───────────────► lines.clear()                                │
//! │                                                                         │
//! │  total()/subtotal() ────► recomputed from lines (read only)            │
//! │                                                                         │
//! │  snapshot() ────────────► deep copy for order placement                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A product appears in at most one line (identity follows product id)
//! - Every line has quantity >= 1; zero-quantity lines cannot exist
//! - Lines keep insertion order; aggregation never reorders them

use serde::Serialize;

use crate::money::Money;
use crate::product::Product;

// =============================================================================
// Line Item
// =============================================================================

/// A product together with the quantity selected.
///
/// The same type serves the live cart and the frozen order snapshot: the
/// held `Product` is a clone, so a line keeps the name, price, and discount
/// the product had when it entered the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Snapshot of the product at the time it was added.
    product: Product,

    /// Units selected; always >= 1.
    quantity: u32,
}

impl LineItem {
    /// Only the cart builds lines, which keeps the quantity invariant local.
    pub(crate) fn new(product: Product, quantity: u32) -> Self {
        LineItem { product, quantity }
    }

    /// Returns the product this line refers to.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the unit count.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total at the effective (discounted) unit price.
    pub fn line_total(&self) -> Money {
        self.product.effective_price() * self.quantity
    }

    /// Line total at the list (undiscounted) unit price.
    pub fn undiscounted_total(&self) -> Money {
        self.product.price() * self.quantity
    }

    /// Amount saved on this line by the discount.
    pub fn savings(&self) -> Money {
        self.undiscounted_total() - self.line_total()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Owned exclusively by a `Customer`; mutation goes through `&mut` methods,
/// so there is no shared-state locking here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: increases its quantity by 1
    /// - If not: appends a new line with quantity 1
    ///
    /// Product identity follows the id, so a product re-added under the
    /// same id aggregates onto the existing line even if other fields
    /// differ. Quantities are unbounded; callers wanting n units call
    /// this n times.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.product == *product) {
            line.quantity += 1;
            return;
        }

        self.lines.push(LineItem::new(product.clone(), 1));
    }

    /// Removes a product's entire line, whatever its quantity.
    ///
    /// Removing a product that is not in the cart is a silent no-op.
    pub fn remove(&mut self, product: &Product) {
        self.lines.retain(|line| line.product != *product);
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Cart total at effective prices. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Cart total at list prices, before discounts.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(LineItem::undiscounted_total).sum()
    }

    /// Amount saved across all lines (subtotal minus total).
    pub fn savings(&self) -> Money {
        self.subtotal() - self.total()
    }

    /// Returns a deep copy of the current lines, in insertion order.
    ///
    /// The copy is fully detached: mutating the cart afterwards does not
    /// touch it. Order placement snapshots the cart through this method.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.lines.clone()
    }

    /// Read-only view of the lines, in insertion order.
    #[inline]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Checks if the cart has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct product lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total unit count across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(LineItem::quantity).sum()
    }

    /// Returns the quantity held for a product, 0 when absent.
    pub fn quantity_of(&self, product: &Product) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product == *product)
            .map_or(0, LineItem::quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
