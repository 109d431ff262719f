//! # Storefront Error Type
//!
//! Errors shown to the terminal user.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in the Storefront                       │
//! │                                                                         │
//! │  input line ──► Command::parse ──► Session::dispatch ──► core call     │
//! │                      │                    │                  │          │
//! │                      ▼                    ▼                  ▼          │
//! │                 AppError            AppError          CoreError         │
//! │                (bad syntax)      (unknown id, ...)   (empty cart)       │
//! │                      │                    │                  │          │
//! │                      └────────────┬───────┴──── #[from] ─────┘          │
//! │                                   ▼                                     │
//! │                     printed as "error: {message}",                      │
//! │                     the session keeps running                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors never end the session; every variant maps to one line of output.

use taiga_core::CoreError;
use thiserror::Error;

/// Errors produced while handling a storefront command.
#[derive(Debug, Error)]
pub enum AppError {
    /// The given id matched nothing in the catalog.
    #[error("no product with id '{0}' in the catalog")]
    UnknownProduct(String),

    /// The first word of the line is not a command.
    #[error("unknown command '{0}', type 'help' for commands")]
    UnknownCommand(String),

    /// A command was missing its required arguments.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// The quantity argument did not parse to a usable number.
    #[error("quantity must be a whole number of at least 1, got '{0}'")]
    InvalidQuantity(String),

    /// The checkout name failed the name policy.
    #[error("checkout name must be 2-30 characters, letters and spaces only")]
    InvalidName,

    /// Export was requested before any order was placed.
    #[error("no order has been placed yet")]
    NoOrder,

    /// Order export failed to serialize.
    #[error("could not export order: {0}")]
    Export(#[from] serde_json::Error),

    /// Business rule violation from the core (wraps CoreError).
    #[error("{0}")]
    Core(#[from] CoreError),
}
