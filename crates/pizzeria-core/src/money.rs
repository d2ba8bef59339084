//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Splitting a 100.00 pizza between 3 guests:                             │
//! │    100.00 / 3 = 33.33 (×3 = 99.99)  → Lost 0.01!                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10000 cents / 3 = 3333 cents, remainder 1 cent                       │
//! │    We KNOW where the leftover cent is, and assign it explicitly         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(3000); // 30.00
//!
//! // Arithmetic operations
//! let doubled = price * 2i64;                   // 60.00
//! let total = price + Money::from_cents(500);   // 35.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction must not be a footgun, even though catalog
///   prices are never negative
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// Every price in the system, from ingredient costs to guest bills,
/// flows through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major-unit portion.
    #[inline]
    pub const fn whole_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the given percentage of this amount, truncated to whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let classic = Money::from_cents(10000); // 100.00
    /// assert_eq!(classic.percent(120).cents(), 12000); // 120.00
    /// ```
    pub fn percent(&self, pct: u32) -> Money {
        // i128 so large amounts cannot overflow mid-calculation
        let cents = self.0 as i128 * pct as i128 / 100;
        Money::from_cents(cents as i64)
    }

    /// Splits this amount evenly between `n` parties.
    ///
    /// Returns `(share, remainder)` where `share` is the largest per-party
    /// amount in whole cents that does not overpay anyone, and `remainder`
    /// is what is left after crediting `share` to all `n` parties
    /// (`0 <= remainder < n` cents). Returns `None` when `n` is zero.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let (share, rem) = Money::from_cents(10000).split_among(3).unwrap();
    /// assert_eq!(share.cents(), 3333); // 33.33 each
    /// assert_eq!(rem.cents(), 1);      // one cent left over
    /// ```
    pub fn split_among(&self, n: usize) -> Option<(Money, Money)> {
        if n == 0 {
            return None;
        }
        let n = n as i64;
        let share = self.0 / n;
        let remainder = self.0 - share * n;
        Some((Money(share), Money(remainder)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable two-decimal rendering, e.g. `112.40`.
///
/// Locale-aware formatting is out of scope; this is what listings and
/// order summaries print.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.whole_part().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by an integer count (portion multipliers, slice counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

impl Mul<u8> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u8) -> Self {
        Money(self.0 * count as i64)
    }
}

/// Summing an iterator of Money values (price aggregation).
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.whole_part(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3i64).cents(), 3000);
        assert_eq!((a * 2u8).cents(), 2000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].iter().map(|c| Money::from_cents(*c)).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_percent() {
        // ceiling rule: 120% of the classic price
        assert_eq!(Money::from_cents(10000).percent(120).cents(), 12000);
        // truncates toward zero when the result is not a whole cent
        assert_eq!(Money::from_cents(9999).percent(120).cents(), 11998);
    }

    #[test]
    fn test_split_among_exact() {
        let (share, rem) = Money::from_cents(30000).split_among(3).unwrap();
        assert_eq!(share.cents(), 10000);
        assert!(rem.is_zero());
    }

    #[test]
    fn test_split_among_with_remainder() {
        // 100.00 / 3 → 33.33 each, one cent left over
        let (share, rem) = Money::from_cents(10000).split_among(3).unwrap();
        assert_eq!(share.cents(), 3333);
        assert_eq!(rem.cents(), 1);
        // shares plus remainder reconstruct the price to the cent
        assert_eq!((share * 3i64 + rem).cents(), 10000);
    }

    #[test]
    fn test_split_among_zero_parties() {
        assert!(Money::from_cents(100).split_among(0).is_none());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }
}
