//! # Domain Types
//!
//! Identifiers, fixed enumerations and the guest type shared across the
//! catalog, pizza and order modules.
//!
//! ## Identity Pattern
//! Every stored entity carries a typed UUID v4 id, immutable after creation,
//! plus a mutable display name. Typed id newtypes keep an `IngredientId` from
//! ever being passed where a `SideId` belongs; references between entities
//! are always by id, never by owned pointer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_name;

// =============================================================================
// Typed Identifiers
// =============================================================================

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`crate::catalog::Ingredient`].
    IngredientId
);
entity_id!(
    /// Identifier of a [`crate::catalog::Base`].
    BaseId
);
entity_id!(
    /// Identifier of a [`crate::catalog::Side`].
    SideId
);
entity_id!(
    /// Identifier of a [`crate::pizza::Pizza`].
    PizzaId
);
entity_id!(
    /// Identifier of a [`Person`] guest.
    PersonId
);
entity_id!(
    /// Identifier of an [`crate::order::Order`].
    OrderId
);

// =============================================================================
// Size
// =============================================================================

/// Pizza size variants.
///
/// Diameter and the price factor are informational metadata; the slice count
/// is what drives the length of a pizza's slice array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// All variants, in menu order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Diameter in centimeters.
    #[inline]
    pub const fn diameter_cm(self) -> u32 {
        match self {
            Size::Small => 20,
            Size::Medium => 30,
            Size::Large => 40,
        }
    }

    /// Number of slices a pizza of this size is cut into.
    #[inline]
    pub const fn slice_count(self) -> usize {
        match self {
            Size::Small => 6,
            Size::Medium => 8,
            Size::Large => 12,
        }
    }

    /// Price scaling factor as an integer percent (80 = ×0.8).
    ///
    /// Pricing metadata only; it does not enter the computed pizza price.
    #[inline]
    pub const fn price_factor_pct(self) -> u32 {
        match self {
            Size::Small => 80,
            Size::Medium => 100,
            Size::Large => 120,
        }
    }

    /// Display label.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Mode
// =============================================================================

/// How a pizza's customization was distributed across slices.
///
/// Purely descriptive bookkeeping: any customization method may be invoked
/// regardless of the declared mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Uniform across all slices.
    Basic,
    /// Two contiguous halves sourced independently.
    Halves,
    /// Arbitrary contiguous ranges sourced independently.
    Parts,
}

impl Mode {
    /// All variants, in menu order.
    pub const ALL: [Mode; 3] = [Mode::Basic, Mode::Halves, Mode::Parts];

    /// Display label.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Basic => "whole",
            Mode::Halves => "halves",
            Mode::Parts => "parts",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Half
// =============================================================================

/// Selects one half of a pizza for side application.
///
/// The console tokens are `"A"` (first half) and `"B"` (second half); for an
/// odd slice count the second half is longer by one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    First,
    Second,
}

impl FromStr for Half {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Half::First),
            "B" | "b" => Ok(Half::Second),
            other => Err(CoreError::InvalidArgument {
                reason: format!("half must be A or B, got '{other}'"),
            }),
        }
    }
}

// =============================================================================
// Person
// =============================================================================

/// A guest on an order. Guests are owned by the order that created them and
/// referenced by id from the per-pizza assignment lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
}

impl Person {
    /// Creates a guest with a fresh id. Fails if the name is blank.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Person {
            id: PersonId::new(),
            name,
        })
    }

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_metadata() {
        assert_eq!(Size::Small.diameter_cm(), 20);
        assert_eq!(Size::Small.slice_count(), 6);
        assert_eq!(Size::Small.price_factor_pct(), 80);

        assert_eq!(Size::Medium.diameter_cm(), 30);
        assert_eq!(Size::Medium.slice_count(), 8);
        assert_eq!(Size::Medium.price_factor_pct(), 100);

        assert_eq!(Size::Large.diameter_cm(), 40);
        assert_eq!(Size::Large.slice_count(), 12);
        assert_eq!(Size::Large.price_factor_pct(), 120);
    }

    #[test]
    fn test_half_parsing() {
        assert_eq!("A".parse::<Half>().unwrap(), Half::First);
        assert_eq!("b".parse::<Half>().unwrap(), Half::Second);
        assert!(matches!(
            "C".parse::<Half>(),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert!("".parse::<Half>().is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(PizzaId::new(), PizzaId::new());
    }

    #[test]
    fn test_person_requires_name() {
        assert!(Person::new("Alice").is_ok());
        assert!(Person::new("   ").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Size::Medium.to_string(), "medium");
        assert_eq!(Mode::Halves.to_string(), "halves");
    }
}
