//! # Identifier Generation
//!
//! Short, human-presentable ids for customers and orders.
//!
//! ## Id Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer / Order ids are 8-character uppercase hex tokens:            │
//! │                                                                         │
//! │      3F2A91BC                                                          │
//! │                                                                         │
//! │  Derived from a v4 UUID (first 8 hex digits). Uniqueness is a          │
//! │  per-process expectation, not a cryptographic guarantee: the token     │
//! │  is short so it fits on a receipt line a person can read back.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generation sits behind the [`IdGenerator`] trait so order placement can
//! run with deterministic ids under test. Production code uses [`UuidIds`];
//! tests use [`SequentialIds`].

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Length of generated id tokens.
pub const SHORT_ID_LEN: usize = 8;

// =============================================================================
// IdGenerator Trait
// =============================================================================

/// Capability for producing entity ids.
///
/// Takes `&self` so generators can be shared and passed as `&dyn IdGenerator`.
pub trait IdGenerator {
    /// Produces the next id token.
    fn generate(&self) -> String;
}

// =============================================================================
// Production Generator
// =============================================================================

/// Random id generator: first [`SHORT_ID_LEN`] hex digits of a v4 UUID,
/// uppercased.
///
/// ## Example
/// ```rust
/// use taiga_core::ids::{IdGenerator, UuidIds, SHORT_ID_LEN};
///
/// let id = UuidIds.generate();
/// assert_eq!(id.len(), SHORT_ID_LEN);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(SHORT_ID_LEN);
        token.make_ascii_uppercase();
        token
    }
}

// =============================================================================
// Deterministic Generator
// =============================================================================

/// Deterministic id generator for tests and reproducible sessions.
///
/// Produces `{prefix}-{n}` with `n` counting up from 1. The counter is
/// atomic, so a shared generator hands out distinct ids even across threads.
///
/// ## Example
/// ```rust
/// use taiga_core::ids::{IdGenerator, SequentialIds};
///
/// let ids = SequentialIds::new("ORD");
/// assert_eq!(ids.generate(), "ORD-1");
/// assert_eq!(ids.generate(), "ORD-2");
/// ```
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator that counts up from `{prefix}-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
