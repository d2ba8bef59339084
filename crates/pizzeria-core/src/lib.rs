//! # pizzeria-core: Pure Business Logic for the Pizzeria
//!
//! This crate is the **heart** of the pizzeria: the pizza composition and
//! pricing engine plus the order billing algorithm, as pure computations
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizzeria Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (menu loop)                      │   │
//! │  │      reads lines, prints listings, reports errors, re-prompts  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            pizzeria-catalog (store + service facade)            │   │
//! │  │      in-memory repositories, seed data, filters, copy-on-add   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizzeria-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │   pizza   │  │   order   │  │   │
//! │  │   │   Money   │  │ Base/Side │  │  Slices   │  │ Billing   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK BEYOND "NOW" CHECKS • PURE COMPUTATIONS    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`error`] - Domain error taxonomy
//! - [`types`] - Typed ids, sizes, modes, guests
//! - [`validation`] - Shared input checks
//! - [`catalog`] - Ingredients, bases, portions, sides, the lookup seam
//! - [`pizza`] - Slice array and the composition engine
//! - [`order`] - Orders, guests and penny-exact bill splitting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; the only ambient reads
//!    are "is this instant in the past?" checks
//! 2. **Integer Money**: all monetary values are cents (i64), never floats
//! 3. **Explicit Errors**: all failures are typed; no panics in non-test code
//! 4. **Validate-then-mutate**: a failed operation leaves its entity as it was
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::catalog::{Base, ClassicPrice};
//! use pizzeria_core::money::Money;
//!
//! let classic = ClassicPrice::new(Money::from_cents(10000)).unwrap();
//! let mut thin = Base::custom("Thin", Money::from_cents(11500), classic.clone()).unwrap();
//!
//! // the 120% ceiling tracks the classic price as it is NOW
//! classic.set(Money::from_cents(12000)).unwrap();
//! assert!(thin.set_price(Money::from_cents(14400)).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod pizza;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pizzeria_core::Money` instead of
// `use pizzeria_core::money::Money`

pub use catalog::{Base, Catalog, ClassicPrice, Ingredient, IngredientPortion, Side};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use order::Order;
pub use pizza::{Pizza, Slice};
pub use types::{
    BaseId, Half, IngredientId, Mode, OrderId, Person, PersonId, PizzaId, SideId, Size,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Classic base price a fresh [`ClassicPrice`] cell starts at.
pub const DEFAULT_CLASSIC_BASE_PRICE: Money = Money::from_cents(10_000);

/// Custom-base price ceiling as a percent of the current classic price.
pub const CUSTOM_BASE_CEILING_PCT: u32 = 120;

/// Display name every classic base is created with.
pub const CLASSIC_BASE_NAME: &str = "Classic";

/// Maximum length of an entity display name.
///
/// Keeps menu listings and receipts on one line.
pub const MAX_NAME_LEN: usize = 200;
