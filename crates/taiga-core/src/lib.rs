//! # taiga-core: Pure Business Logic for Taiga
//!
//! This crate is the **heart** of Taiga. It contains the whole
//! cart-to-order pipeline as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Taiga Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront (terminal app)                      │   │
//! │  │    catalog table ──► cart commands ──► checkout ──► receipt    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ taiga-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   cart    │  │ customer  │  │   order   │  │   │
//! │  │   │  Product  │  │   Cart    │  │ Customer  │  │   Order   │  │   │
//! │  │   │ Discount  │  │ LineItem  │  │ checkout  │  │  receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   money   │  │validation │  │    ids    │                 │   │
//! │  │   │   Money   │  │   rules   │  │ IdGen     │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE LOGIC               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Catalog products and discount pricing
//! - [`cart`] - The mutable cart and its line items
//! - [`customer`] - Cart ownership and order placement
//! - [`order`] - Immutable order snapshots and receipts
//! - [`money`] - Money type, double-precision with display rounding
//! - [`validation`] - Field-level construction rules
//! - [`ids`] - Id generation behind an injectable trait
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Synchronous and pure**: every operation completes or fails in place
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Validated construction**: invalid products and orders cannot exist
//! 4. **Explicit errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use taiga_core::{Customer, Product};
//!
//! let laptop = Product::new("P001", "Laptop Pro", "Electronics", 1299.99).unwrap();
//! let mug = Product::with_discount("P003", "Java Mug", "Kitchen", 15.0, 0.2).unwrap();
//!
//! let mut alice = Customer::new("Alice");
//! alice.add_to_cart(&laptop);
//! alice.add_to_cart(&mug);
//! alice.add_to_cart(&mug);
//!
//! let order = alice.place_order().unwrap();
//! assert_eq!(order.total().to_string(), "$1323.99");
//! assert!(alice.cart().is_empty());
//!
//! println!("{}", order.generate_receipt());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod customer;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod product;
pub mod validation;

mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use taiga_core::Customer` instead of
// `use taiga_core::customer::Customer`

pub use cart::{Cart, LineItem};
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use money::Money;
pub use order::Order;
pub use product::{DiscountRate, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category stored for products created with a blank category.
///
/// A missing category is a defaulting case, not a validation failure:
/// the product lands in this catch-all group instead.
pub const DEFAULT_CATEGORY: &str = "General";
