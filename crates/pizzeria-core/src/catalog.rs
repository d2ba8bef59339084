//! # Catalog Primitives
//!
//! The priceable building blocks a pizza is composed from: ingredients,
//! bases, ingredient portions and sides, plus the [`Catalog`] lookup seam
//! that resolves stable ids back to entities at pricing time.
//!
//! ## The Shared Classic Price
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ClassicPrice: one cell, many observers                                │
//! │                                                                         │
//! │      ClassicPrice ──── Arc<Mutex<Money>> ────┐                          │
//! │         │                                    │                          │
//! │   Base (classic) ── reads/writes the cell    │                          │
//! │   Base (classic) ── sees the same value ─────┤                          │
//! │   Base (custom)  ── ceiling = 120% of cell ──┘                          │
//! │                                                                         │
//! │  Setting the price through ANY classic base updates the one cell;       │
//! │  every classic base, past and future, observes the new value.           │
//! │  Custom bases re-check the 120% ceiling on every price mutation,        │
//! │  so raising or lowering the classic price moves the ceiling for         │
//! │  subsequent mutations; existing prices are never retroactively broken. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cell is an explicit value injected at construction, never a `static`:
//! each test builds its own cell and nothing leaks between tests.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BaseId, IngredientId, PizzaId, SideId};
use crate::validation::{
    validate_base_price, validate_ingredient_price, validate_multiplier, validate_name,
};
use crate::{CLASSIC_BASE_NAME, CUSTOM_BASE_CEILING_PCT, DEFAULT_CLASSIC_BASE_PRICE};

// =============================================================================
// Classic Price Cell
// =============================================================================

/// Cheap clonable handle to the process-wide classic base price.
///
/// All classic bases constructed from the same handle observe a single
/// value. The mutex answers the multi-threading question conservatively:
/// mutation stays safe even if the host embeds the catalog in a
/// multi-threaded runtime.
#[derive(Debug, Clone)]
pub struct ClassicPrice {
    cell: Arc<Mutex<Money>>,
}

impl ClassicPrice {
    /// Creates a cell holding `initial`. Fails unless `initial > 0`.
    pub fn new(initial: Money) -> CoreResult<Self> {
        validate_base_price(initial)?;
        Ok(ClassicPrice {
            cell: Arc::new(Mutex::new(initial)),
        })
    }

    /// Current classic price.
    pub fn get(&self) -> Money {
        *self.cell.lock().expect("classic price mutex poisoned")
    }

    /// Updates the shared value. Fails with `InvalidPrice` unless `price > 0`.
    pub fn set(&self, price: Money) -> CoreResult<()> {
        validate_base_price(price)?;
        *self.cell.lock().expect("classic price mutex poisoned") = price;
        Ok(())
    }

    /// The custom-base price ceiling: 120% of the current classic price.
    pub fn ceiling(&self) -> Money {
        self.get().percent(CUSTOM_BASE_CEILING_PCT)
    }
}

impl Default for ClassicPrice {
    fn default() -> Self {
        ClassicPrice {
            cell: Arc::new(Mutex::new(DEFAULT_CLASSIC_BASE_PRICE)),
        }
    }
}

// =============================================================================
// Ingredient
// =============================================================================

/// A priced ingredient. Referenced by id from portions; never owned by a
/// pizza or side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    id: IngredientId,
    name: String,
    price: Money,
}

impl Ingredient {
    /// Creates an ingredient. Fails on a blank name or a negative price
    /// (zero is allowed).
    pub fn new(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_ingredient_price(price)?;
        Ok(Ingredient {
            id: IngredientId::new(),
            name,
            price,
        })
    }

    #[inline]
    pub fn id(&self) -> IngredientId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Fails with `InvalidPrice` for negative values.
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        validate_ingredient_price(price)?;
        self.price = price;
        Ok(())
    }
}

// =============================================================================
// Base
// =============================================================================

/// Price source of a [`Base`].
#[derive(Debug, Clone, PartialEq)]
enum BaseKind {
    /// Price lives in the shared [`ClassicPrice`] cell.
    Classic,
    /// Own price, ceiling-checked against the shared cell on every mutation.
    Custom { price: Money },
}

/// A pizza base (crust). Two variants with different pricing rules:
///
/// - **classic**: the price is shared process-wide state; setting it on any
///   classic base updates the single cell all classic bases read.
/// - **custom**: carries its own price, which must stay within
///   `0 < price <= 120% of the current classic price` at creation and on
///   every subsequent mutation.
#[derive(Debug, Clone)]
pub struct Base {
    id: BaseId,
    name: String,
    classic: ClassicPrice,
    kind: BaseKind,
}

impl Base {
    /// Creates a classic base bound to the given shared price cell.
    pub fn classic(classic: ClassicPrice) -> Self {
        Base {
            id: BaseId::new(),
            name: CLASSIC_BASE_NAME.to_string(),
            classic,
            kind: BaseKind::Classic,
        }
    }

    /// Creates a custom base.
    ///
    /// ## Rules
    /// - name must not be blank
    /// - `price > 0`, else `InvalidPrice`
    /// - `price <= 120% of classic`, else `PriceCeilingExceeded`
    pub fn custom(
        name: impl Into<String>,
        price: Money,
        classic: ClassicPrice,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        check_custom_price(price, &classic)?;
        Ok(Base {
            id: BaseId::new(),
            name,
            classic,
            kind: BaseKind::Custom { price },
        })
    }

    #[inline]
    pub fn id(&self) -> BaseId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_classic(&self) -> bool {
        matches!(self.kind, BaseKind::Classic)
    }

    /// Current price: the shared cell for classic bases, the own field for
    /// custom ones.
    pub fn price(&self) -> Money {
        match self.kind {
            BaseKind::Classic => self.classic.get(),
            BaseKind::Custom { price } => price,
        }
    }

    /// Mutates the price.
    ///
    /// For a classic base this writes the shared cell; the change is
    /// immediately visible to every other classic base. For a custom base
    /// the 120% ceiling is re-validated against the classic price as it is
    /// *now*, not as it was at construction.
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        match self.kind {
            BaseKind::Classic => self.classic.set(price),
            BaseKind::Custom { .. } => {
                check_custom_price(price, &self.classic)?;
                self.kind = BaseKind::Custom { price };
                Ok(())
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }
}

fn check_custom_price(price: Money, classic: &ClassicPrice) -> CoreResult<()> {
    validate_base_price(price)?;
    let ceiling = classic.ceiling();
    if price > ceiling {
        return Err(CoreError::PriceCeilingExceeded { price, ceiling });
    }
    Ok(())
}

// =============================================================================
// Ingredient Portion
// =============================================================================

/// An immutable pairing of an ingredient with a single or double helping.
///
/// Cost is resolved live against the catalog, so an ingredient price change
/// flows through every portion that references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientPortion {
    ingredient: IngredientId,
    multiplier: u8,
}

impl IngredientPortion {
    /// Creates a portion. Fails with `InvalidPortion` unless the multiplier
    /// is 1 or 2.
    pub fn new(ingredient: IngredientId, multiplier: u8) -> CoreResult<Self> {
        validate_multiplier(multiplier)?;
        Ok(IngredientPortion {
            ingredient,
            multiplier,
        })
    }

    #[inline]
    pub fn ingredient(&self) -> IngredientId {
        self.ingredient
    }

    #[inline]
    pub fn multiplier(&self) -> u8 {
        self.multiplier
    }

    /// `ingredient price × multiplier`. `NotFound` if the ingredient has
    /// been deleted from the catalog since the portion was added.
    pub fn cost<C: Catalog + ?Sized>(&self, catalog: &C) -> CoreResult<Money> {
        let ingredient = catalog.require_ingredient(self.ingredient)?;
        Ok(ingredient.price() * self.multiplier)
    }
}

// =============================================================================
// Side
// =============================================================================

/// An edge topping (stuffed crust). Priced as the sum of its ingredient
/// portions, shared by reference across any number of slices and pizzas,
/// and explicitly bannable from specific pizza instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Side {
    id: SideId,
    name: String,
    portions: Vec<IngredientPortion>,
    banned_pizzas: Vec<PizzaId>,
}

impl Side {
    /// Creates an empty side. Fails if the name is blank.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Side {
            id: SideId::new(),
            name,
            portions: Vec::new(),
            banned_pizzas: Vec::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> SideId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn portions(&self) -> &[IngredientPortion] {
        &self.portions
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Appends a portion of the given ingredient.
    pub fn add_ingredient(&mut self, ingredient: &Ingredient, multiplier: u8) -> CoreResult<()> {
        self.portions
            .push(IngredientPortion::new(ingredient.id(), multiplier)?);
        Ok(())
    }

    /// Removes all portions referencing the ingredient. Removing an absent
    /// id is a no-op.
    pub fn remove_ingredient(&mut self, ingredient: IngredientId) {
        self.portions.retain(|p| p.ingredient() != ingredient);
    }

    /// Sum of the portion costs.
    pub fn price<C: Catalog + ?Sized>(&self, catalog: &C) -> CoreResult<Money> {
        let mut total = Money::zero();
        for portion in &self.portions {
            total += portion.cost(catalog)?;
        }
        Ok(total)
    }

    /// Excludes this side from the given pizza.
    pub fn ban_pizza(&mut self, pizza: PizzaId) {
        if !self.banned_pizzas.contains(&pizza) {
            self.banned_pizzas.push(pizza);
        }
    }

    /// Lifts the exclusion. Unbanning a pizza that was never banned is a
    /// no-op.
    pub fn unban_pizza(&mut self, pizza: PizzaId) {
        self.banned_pizzas.retain(|id| *id != pizza);
    }

    #[inline]
    pub fn is_banned_for(&self, pizza: PizzaId) -> bool {
        self.banned_pizzas.contains(&pizza)
    }

    #[inline]
    pub fn banned_pizzas(&self) -> &[PizzaId] {
        &self.banned_pizzas
    }
}

// =============================================================================
// Catalog Lookup Seam
// =============================================================================

/// Resolves stable ids to catalog entities at pricing/description time.
///
/// Implemented by the service facade over its repositories; tests implement
/// it over plain vectors. The `require_*` helpers fold a missing entity into
/// the `NotFound` error kind.
pub trait Catalog {
    fn ingredient(&self, id: IngredientId) -> Option<&Ingredient>;
    fn base(&self, id: BaseId) -> Option<&Base>;
    fn side(&self, id: SideId) -> Option<&Side>;

    fn require_ingredient(&self, id: IngredientId) -> CoreResult<&Ingredient> {
        self.ingredient(id)
            .ok_or_else(|| CoreError::not_found("ingredient", id))
    }

    fn require_base(&self, id: BaseId) -> CoreResult<&Base> {
        self.base(id).ok_or_else(|| CoreError::not_found("base", id))
    }

    fn require_side(&self, id: SideId) -> CoreResult<&Side> {
        self.side(id).ok_or_else(|| CoreError::not_found("side", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
