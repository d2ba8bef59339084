//! # Error Types
//!
//! Domain errors for pizzeria-core.
//!
//! Every failure here is a local, synchronous, non-retriable validation
//! failure: operations validate before they mutate, so a returned error
//! leaves the entity in its prior state. Callers (the console layer) report
//! the message and re-prompt; nothing is fatal.
//!
//! ## Design Principles
//! 1. `thiserror` derive, never manual `Display` plumbing
//! 2. Variants carry context (the offending price, the index, the ceiling)
//! 3. Errors are enum variants, never strings

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::money::Money;
use crate::types::{PizzaId, SideId};

// =============================================================================
// Core Error
// =============================================================================

/// Business-rule violations surfaced by the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A price that is negative where zero is the floor, or non-positive
    /// where only strictly positive prices are allowed.
    #[error("invalid price: {price}")]
    InvalidPrice { price: Money },

    /// A custom base priced above 120% of the current classic price.
    #[error("base price {price} exceeds the ceiling of {ceiling} (120% of the classic price)")]
    PriceCeilingExceeded { price: Money, ceiling: Money },

    /// An ingredient portion with a multiplier outside {1, 2}.
    #[error("portion multiplier must be 1 or 2, got {multiplier}")]
    InvalidPortion { multiplier: u8 },

    /// A 1-based slice index or range outside the pizza's bounds.
    ///
    /// A single-slice operation reports `start == end`.
    #[error("slice selection {start}..={end} is outside 1..={count}")]
    OutOfRange {
        start: usize,
        end: usize,
        count: usize,
    },

    /// Merging pizzas whose slice counts differ.
    #[error("slice counts differ: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },

    /// Assigning a side that is banned for the target pizza.
    #[error("side {side} is not allowed on pizza {pizza}")]
    SideNotAllowed { side: SideId, pizza: PizzaId },

    /// Malformed input: blank required name, unknown half token, a local
    /// date/time that does not exist in the given zone.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Scheduling an order before the current moment.
    #[error("cannot schedule for {requested}: that moment is already in the past")]
    PastTime { requested: DateTime<Utc> },

    /// An entity lookup by identifier came up empty.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl CoreError {
    /// Builds a [`CoreError::NotFound`] for any displayable id.
    pub fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for results with [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PriceCeilingExceeded {
            price: Money::from_cents(15000),
            ceiling: Money::from_cents(12000),
        };
        assert_eq!(
            err.to_string(),
            "base price 150.00 exceeds the ceiling of 120.00 (120% of the classic price)"
        );

        let err = CoreError::OutOfRange {
            start: 1,
            end: 12,
            count: 8,
        };
        assert_eq!(err.to_string(), "slice selection 1..=12 is outside 1..=8");

        let err = CoreError::InvalidPortion { multiplier: 3 };
        assert_eq!(err.to_string(), "portion multiplier must be 1 or 2, got 3");
    }

    #[test]
    fn test_not_found_builder() {
        let id = PizzaId::new();
        let err = CoreError::not_found("pizza", id);
        assert_eq!(err.to_string(), format!("pizza not found: {id}"));
    }
}
