//! # Customer Module
//!
//! Customers own the cart and drive checkout.
//!
//! ## Checkout Flow
//! ```text
//! add_to_cart(product)        (repeat as needed)
//!      │
//!      ▼
//! place_order()
//!      │
//!      ├── cart empty? ──► Err(CoreError::EmptyCart), cart untouched
//!      │
//!      ▼
//! Order::new(id, name, cart.snapshot(), ids)
//!      │
//!      ▼
//! cart.clear()                (only after the order exists)
//!      │
//!      ▼
//! Ok(Order)
//! ```
//!
//! The order is fully built before the cart is cleared, and the only
//! failure path is the empty-cart guard before any state changes. A
//! caller never observes a cleared cart without an order in hand.

use serde::Serialize;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::ids::{IdGenerator, UuidIds};
use crate::money::Money;
use crate::order::Order;
use crate::product::Product;

// =============================================================================
// Customer
// =============================================================================

/// A customer with a stable id, a display name, and one cart.
///
/// The id is generated at construction and never changes. The name is
/// free-form: any string is accepted here, and callers with naming rules
/// (such as a checkout form) enforce them before calling in.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    /// Stable 8-character id token.
    id: String,

    /// Display name; mutable, unvalidated.
    name: String,

    /// The customer's single active cart.
    cart: Cart,
}

impl Customer {
    /// Creates a customer with a random id and an empty cart.
    ///
    /// ## Example
    /// ```rust
    /// use taiga_core::customer::Customer;
    ///
    /// let guest = Customer::new("Guest");
    /// assert_eq!(guest.name(), "Guest");
    /// assert_eq!(guest.id().len(), 8);
    /// assert!(guest.cart().is_empty());
    /// ```
    pub fn new(name: &str) -> Self {
        Self::with_ids(name, &UuidIds)
    }

    /// Creates a customer with an id from the given generator.
    pub fn with_ids(name: &str, ids: &dyn IdGenerator) -> Self {
        Customer {
            id: ids.generate(),
            name: name.to_string(),
            cart: Cart::new(),
        }
    }

    /// Returns the stable customer id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Read-only view of the cart.
    ///
    /// Mutation goes through the delegation methods below; the cart itself
    /// is never handed out mutably.
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of a product to the cart.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
    }

    /// Removes a product's entire line from the cart.
    pub fn remove_from_cart(&mut self, product: &Product) {
        self.cart.remove(product);
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Current cart total at effective prices.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Places an order from the current cart, then empties the cart.
    ///
    /// ## Behavior
    /// - Empty cart: fails with [`CoreError::EmptyCart`], cart untouched
    /// - Otherwise: the order snapshots the cart (deep copy), the cart is
    ///   cleared, and the order is returned
    ///
    /// Placing twice in a row therefore fails the second time, since the
    /// first placement emptied the cart.
    pub fn place_order(&mut self) -> CoreResult<Order> {
        self.place_order_with(&UuidIds)
    }

    /// Places an order using the given id generator for the order id.
    pub fn place_order_with(&mut self, ids: &dyn IdGenerator) -> CoreResult<Order> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let order = Order::new(self.id.clone(), self.name.clone(), self.cart.snapshot(), ids)?;
        self.cart.clear();

        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
