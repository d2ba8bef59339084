//! # Validation Module
//!
//! Shared input checks used by the domain types. Each returns a
//! [`CoreResult`] so callers can validate before they mutate; a failed
//! check never leaves an entity half-updated.
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::validation::{validate_multiplier, validate_slice_range};
//!
//! validate_multiplier(2).unwrap();
//! assert!(validate_multiplier(3).is_err());
//!
//! // 1-based inclusive range over an 8-slice pizza
//! validate_slice_range(2, 5, 8).unwrap();
//! assert!(validate_slice_range(1, 12, 8).is_err());
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_NAME_LEN;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity display name.
///
/// ## Rules
/// - Must not be blank
/// - Must be at most [`MAX_NAME_LEN`] characters
pub fn validate_name(name: &str) -> CoreResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CoreError::InvalidArgument {
            reason: "name must not be blank".to_string(),
        });
    }

    if trimmed.len() > MAX_NAME_LEN {
        return Err(CoreError::InvalidArgument {
            reason: format!("name must be at most {MAX_NAME_LEN} characters"),
        });
    }

    Ok(())
}

// =============================================================================
// Price Validators
// =============================================================================

/// Validates an ingredient price: zero is allowed, negative is not.
pub fn validate_ingredient_price(price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice { price });
    }
    Ok(())
}

/// Validates a base price: must be strictly positive.
pub fn validate_base_price(price: Money) -> CoreResult<()> {
    if !price.is_positive() {
        return Err(CoreError::InvalidPrice { price });
    }
    Ok(())
}

// =============================================================================
// Portion and Slice Validators
// =============================================================================

/// Validates an ingredient portion multiplier: only 1 and 2 are legal.
pub fn validate_multiplier(multiplier: u8) -> CoreResult<()> {
    if multiplier != 1 && multiplier != 2 {
        return Err(CoreError::InvalidPortion { multiplier });
    }
    Ok(())
}

/// Validates a 1-based slice index against a pizza's slice count.
pub fn validate_slice_index(index: usize, count: usize) -> CoreResult<()> {
    if index < 1 || index > count {
        return Err(CoreError::OutOfRange {
            start: index,
            end: index,
            count,
        });
    }
    Ok(())
}

/// Validates a 1-based inclusive slice range against a pizza's slice count.
///
/// ## Rules
/// - `start >= 1`
/// - `end <= count`
/// - `start <= end`
pub fn validate_slice_range(start: usize, end: usize, count: usize) -> CoreResult<()> {
    if start < 1 || end > count || start > end {
        return Err(CoreError::OutOfRange { start, end, count });
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
    fn test_validate_name() {
        assert!(validate_name("Margherita").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_ingredient_price() {
        assert!(validate_ingredient_price(Money::from_cents(0)).is_ok());
        assert!(validate_ingredient_price(Money::from_cents(3000)).is_ok());
        assert!(validate_ingredient_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::from_cents(1)).is_ok());
        assert!(validate_base_price(Money::from_cents(0)).is_err());
        assert!(validate_base_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_multiplier() {
        assert!(validate_multiplier(1).is_ok());
        assert!(validate_multiplier(2).is_ok());
        assert!(validate_multiplier(0).is_err());
        assert!(validate_multiplier(3).is_err());
    }

    #[test]
    fn test_validate_slice_index() {
        assert!(validate_slice_index(1, 8).is_ok());
        assert!(validate_slice_index(8, 8).is_ok());
        assert!(validate_slice_index(0, 8).is_err());
        assert!(validate_slice_index(9, 8).is_err());
    }

    #[test]
    fn test_validate_slice_range() {
        assert!(validate_slice_range(1, 8, 8).is_ok());
        assert!(validate_slice_range(3, 3, 8).is_ok());
        assert!(validate_slice_range(0, 4, 8).is_err());
        assert!(validate_slice_range(1, 9, 8).is_err());
        assert!(validate_slice_range(5, 4, 8).is_err());
    }
}
