//! # Pizza Composition Engine
//!
//! A [`Pizza`] owns an array of [`Slice`] value structs, one per slice of
//! its [`Size`], and exposes the customization surface: uniform, per-slice,
//! range and half-based ingredient application, side application with
//! ban-list enforcement, and the aggregate price.
//!
//! ## Pricing
//! ```text
//! price = base.price
//!       + Σ cost of every slice's ingredient portions
//!       + Σ price of each DISTINCT side used across the slices
//! ```
//! Side distinctness is by identity (id), not by price value: the same side
//! referenced from six slices is billed once; two different sides that
//! happen to cost the same are billed twice.
//!
//! Slices are exclusively owned by their pizza and live and die with it.
//! Ingredients, bases and sides are referenced by id and resolved through
//! the [`Catalog`] seam when a price or description is computed.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::catalog::{Base, Catalog, Ingredient, IngredientPortion, Side};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BaseId, Half, IngredientId, Mode, PizzaId, SideId, Size};
use crate::validation::{validate_name, validate_slice_index, validate_slice_range};

// =============================================================================
// Slice
// =============================================================================

/// One slice: an optional side reference plus the ingredient portions piled
/// on it. A plain value struct; slices have no identity of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    side: Option<SideId>,
    portions: Vec<IngredientPortion>,
}

impl Slice {
    fn with_side(side: Option<SideId>) -> Self {
        Slice {
            side,
            portions: Vec::new(),
        }
    }

    #[inline]
    pub fn side(&self) -> Option<SideId> {
        self.side
    }

    #[inline]
    pub fn portions(&self) -> &[IngredientPortion] {
        &self.portions
    }

    /// Appends a portion. Fails with `InvalidPortion` on a bad multiplier.
    pub fn add_ingredient(&mut self, ingredient: &Ingredient, multiplier: u8) -> CoreResult<()> {
        self.portions
            .push(IngredientPortion::new(ingredient.id(), multiplier)?);
        Ok(())
    }

    /// Removes every portion referencing the ingredient. Idempotent.
    pub fn remove_ingredient(&mut self, ingredient: IngredientId) {
        self.portions.retain(|p| p.ingredient() != ingredient);
    }

    /// Empties the ingredient list. Does not touch the side.
    pub fn clear_ingredients(&mut self) {
        self.portions.clear();
    }

    /// Assigns a side, or clears it with `None` (always allowed).
    ///
    /// Fails with `SideNotAllowed` when the side's ban list contains the
    /// owning pizza's id; the prior side stays in place.
    pub fn set_side(&mut self, side: Option<&Side>, owner: PizzaId) -> CoreResult<()> {
        match side {
            None => {
                self.side = None;
                Ok(())
            }
            Some(side) => {
                if side.is_banned_for(owner) {
                    return Err(CoreError::SideNotAllowed {
                        side: side.id(),
                        pizza: owner,
                    });
                }
                self.side = Some(side.id());
                Ok(())
            }
        }
    }

    /// Sum of this slice's portion costs.
    pub fn ingredients_cost<C: Catalog + ?Sized>(&self, catalog: &C) -> CoreResult<Money> {
        let mut total = Money::zero();
        for portion in &self.portions {
            total += portion.cost(catalog)?;
        }
        Ok(total)
    }
}

// =============================================================================
// Pizza
// =============================================================================

/// A composite of slices over a base.
///
/// ## Invariants
/// - `slices.len() == size.slice_count()` at all times
/// - changing the size reinitializes every slice (customization is
///   intentionally discarded)
/// - the base reference is always present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    id: PizzaId,
    name: String,
    base: BaseId,
    size: Size,
    mode: Mode,
    /// Side each fresh slice starts with; commonly `None`.
    initial_side: Option<SideId>,
    slices: Vec<Slice>,
}

impl Pizza {
    /// Creates a pizza with `size.slice_count()` fresh slices, each
    /// inheriting the given initial side.
    pub fn new(
        name: impl Into<String>,
        base: &Base,
        size: Size,
        mode: Mode,
        side: Option<&Side>,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        let initial_side = side.map(Side::id);
        Ok(Pizza {
            id: PizzaId::new(),
            name,
            base: base.id(),
            size,
            mode,
            initial_side,
            slices: vec![Slice::with_side(initial_side); size.slice_count()],
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> PizzaId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn base(&self) -> BaseId {
        self.base
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    #[inline]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    // -------------------------------------------------------------------------
    // Plain mutators
    // -------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_base(&mut self, base: &Base) {
        self.base = base.id();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Reassigns the size and reinitializes all slices from scratch.
    ///
    /// Prior per-slice customization, ingredients and sides alike, is
    /// discarded. This is the documented behavior for size changes.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.slices = vec![Slice::with_side(self.initial_side); size.slice_count()];
    }

    // -------------------------------------------------------------------------
    // Ingredient application
    // -------------------------------------------------------------------------

    /// Applies one ingredient portion to every slice.
    pub fn add_ingredients_basic(
        &mut self,
        ingredient: &Ingredient,
        multiplier: u8,
    ) -> CoreResult<()> {
        let portion = IngredientPortion::new(ingredient.id(), multiplier)?;
        for slice in &mut self.slices {
            slice.portions.push(portion);
        }
        Ok(())
    }

    /// Applies an ingredient portion to a single slice (1-based index).
    pub fn add_ingredient_to_slice(
        &mut self,
        slice_number: usize,
        ingredient: &Ingredient,
        multiplier: u8,
    ) -> CoreResult<()> {
        validate_slice_index(slice_number, self.slices.len())?;
        self.slices[slice_number - 1].add_ingredient(ingredient, multiplier)
    }

    /// Applies an ingredient portion to the 1-based inclusive slice range
    /// `start..=end`.
    pub fn add_ingredient_parts(
        &mut self,
        ingredient: &Ingredient,
        multiplier: u8,
        start: usize,
        end: usize,
    ) -> CoreResult<()> {
        validate_slice_range(start, end, self.slices.len())?;
        let portion = IngredientPortion::new(ingredient.id(), multiplier)?;
        for slice in &mut self.slices[start - 1..end] {
            slice.portions.push(portion);
        }
        Ok(())
    }

    /// Rebuilds this pizza's ingredient layout from two source pizzas: the
    /// first half copies slice-for-slice from `first`, the second half from
    /// `second`.
    ///
    /// The copy *replaces* each target slice's ingredient list; sides are
    /// untouched. `mid = slice_count / 2`, so for odd counts the second
    /// half is longer by one slice. All three pizzas must share one slice
    /// count, else `SizeMismatch`.
    pub fn apply_halves_from(&mut self, first: &Pizza, second: &Pizza) -> CoreResult<()> {
        if first.slice_count() != second.slice_count() {
            return Err(CoreError::SizeMismatch {
                left: first.slice_count(),
                right: second.slice_count(),
            });
        }
        if self.slice_count() != first.slice_count() {
            return Err(CoreError::SizeMismatch {
                left: self.slice_count(),
                right: first.slice_count(),
            });
        }

        let mid = self.slices.len() / 2;
        for (target, source) in self.slices[..mid].iter_mut().zip(&first.slices[..mid]) {
            target.portions = source.portions.clone();
        }
        for (target, source) in self.slices[mid..].iter_mut().zip(&second.slices[mid..]) {
            target.portions = source.portions.clone();
        }
        Ok(())
    }

    /// Removes the ingredient from every slice. Idempotent.
    pub fn remove_ingredient_everywhere(&mut self, ingredient: IngredientId) {
        for slice in &mut self.slices {
            slice.remove_ingredient(ingredient);
        }
    }

    /// Empties every slice's ingredient list. Sides are untouched.
    pub fn clear_ingredients_everywhere(&mut self) {
        for slice in &mut self.slices {
            slice.clear_ingredients();
        }
    }

    // -------------------------------------------------------------------------
    // Side application
    // -------------------------------------------------------------------------

    /// Rejects a side banned for this pizza before any slice is touched, so
    /// multi-slice side application never partially applies.
    fn check_side_allowed(&self, side: Option<&Side>) -> CoreResult<()> {
        if let Some(side) = side {
            if side.is_banned_for(self.id) {
                return Err(CoreError::SideNotAllowed {
                    side: side.id(),
                    pizza: self.id,
                });
            }
        }
        Ok(())
    }

    /// Assigns the side to every slice (`None` clears all).
    pub fn add_side_basic(&mut self, side: Option<&Side>) -> CoreResult<()> {
        self.check_side_allowed(side)?;
        let id = side.map(Side::id);
        for slice in &mut self.slices {
            slice.side = id;
        }
        Ok(())
    }

    /// Assigns the side to one half: slices `0..mid` for [`Half::First`],
    /// `mid..count` for [`Half::Second`] (`mid = count / 2`).
    pub fn add_side_halves(&mut self, side: Option<&Side>, half: Half) -> CoreResult<()> {
        self.check_side_allowed(side)?;
        let id = side.map(Side::id);
        let mid = self.slices.len() / 2;
        let range = match half {
            Half::First => &mut self.slices[..mid],
            Half::Second => &mut self.slices[mid..],
        };
        for slice in range {
            slice.side = id;
        }
        Ok(())
    }

    /// Assigns the side to the 1-based inclusive slice range `start..=end`.
    pub fn add_side_parts(
        &mut self,
        side: Option<&Side>,
        start: usize,
        end: usize,
    ) -> CoreResult<()> {
        validate_slice_range(start, end, self.slices.len())?;
        self.check_side_allowed(side)?;
        let id = side.map(Side::id);
        for slice in &mut self.slices[start - 1..end] {
            slice.side = id;
        }
        Ok(())
    }

    /// Assigns the side to a single slice (1-based index).
    pub fn set_side_to_slice(&mut self, slice_number: usize, side: Option<&Side>) -> CoreResult<()> {
        validate_slice_index(slice_number, self.slices.len())?;
        let owner = self.id;
        self.slices[slice_number - 1].set_side(side, owner)
    }

    // -------------------------------------------------------------------------
    // Price and description
    // -------------------------------------------------------------------------

    /// Aggregate price: base + all slice portions + each distinct side once.
    pub fn price<C: Catalog + ?Sized>(&self, catalog: &C) -> CoreResult<Money> {
        let mut total = catalog.require_base(self.base)?.price();

        for slice in &self.slices {
            total += slice.ingredients_cost(catalog)?;
        }

        // distinct by side identity; slice counts are small enough that a
        // linear seen-list beats hashing
        let mut seen: Vec<SideId> = Vec::new();
        for slice in &self.slices {
            let Some(side_id) = slice.side else { continue };
            if seen.contains(&side_id) {
                continue;
            }
            seen.push(side_id);
            total += catalog.require_side(side_id)?.price(catalog)?;
        }

        Ok(total)
    }

    /// Deterministic multi-line summary: header, then one line per slice
    /// with its side and ingredient list. A pure read projection.
    pub fn describe<C: Catalog + ?Sized>(&self, catalog: &C) -> CoreResult<String> {
        let base = catalog.require_base(self.base)?;
        let price = self.price(catalog)?;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Pizza: {}, size: {}, base: {}, mode: {}, price: {}",
            self.name, self.size, base.name(), self.mode, price
        );

        for (i, slice) in self.slices.iter().enumerate() {
            let side_name = match slice.side {
                Some(id) => catalog.require_side(id)?.name().to_string(),
                None => "none".to_string(),
            };
            let _ = write!(out, "  Slice {}: side={}; ingredients=[", i + 1, side_name);
            for (j, portion) in slice.portions.iter().enumerate() {
                if j > 0 {
                    out.push_str(", ");
                }
                let ingredient = catalog.require_ingredient(portion.ingredient())?;
                let _ = write!(out, "{} x{}", ingredient.name(), portion.multiplier());
            }
            out.push_str("]\n");
        }

        Ok(out)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ClassicPrice;

    /// Catalog over plain vectors, assembled per test.
    #[derive(Default)]
    struct TestCatalog {
        ingredients: Vec<Ingredient>,
        bases: Vec<Base>,
        sides: Vec<Side>,
    }

    impl Catalog for TestCatalog {
        fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
            self.ingredients.iter().find(|i| i.id() == id)
        }

        fn base(&self, id: BaseId) -> Option<&Base> {
            self.bases.iter().find(|b| b.id() == id)
        }

        fn side(&self, id: SideId) -> Option<&Side> {
            self.sides.iter().find(|s| s.id() == id)
        }
    }

    /// Classic price 100.00, one classic base, cheese 30.00, tomatoes 20.00.
    fn fixture() -> (TestCatalog, Base, Ingredient, Ingredient) {
        let cell = ClassicPrice::new(Money::from_cents(10000)).unwrap();
        let base = Base::classic(cell);
        let cheese = Ingredient::new("Cheese", Money::from_cents(3000)).unwrap();
        let tomatoes = Ingredient::new("Tomatoes", Money::from_cents(2000)).unwrap();
        let catalog = TestCatalog {
            ingredients: vec![cheese.clone(), tomatoes.clone()],
            bases: vec![base.clone()],
            sides: vec![],
        };
        (catalog, base, cheese, tomatoes)
    }

    fn cheese_side(catalog: &mut TestCatalog, cheese: &Ingredient) -> Side {
        let mut side = Side::new("Cheese crust").unwrap();
        side.add_ingredient(cheese, 2).unwrap();
        catalog.sides.push(side.clone());
        side
    }

    #[test]
    fn test_construction_matches_size() {
        let (_, base, _, _) = fixture();
        let pizza = Pizza::new("Plain", &base, Size::Medium, Mode::Basic, None).unwrap();
        assert_eq!(pizza.slice_count(), 8);
        assert!(pizza.slices().iter().all(|s| s.side().is_none()));
        assert!(pizza.slices().iter().all(|s| s.portions().is_empty()));
    }

    #[test]
    fn test_base_only_price() {
        // classic price 100.00, no ingredients, no sides → price 100.00
        let (catalog, base, _, _) = fixture();
        let pizza = Pizza::new("Plain", &base, Size::Medium, Mode::Basic, None).unwrap();
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000);
    }

    #[test]
    fn test_basic_ingredient_price() {
        // 8 slices × (30.00 × 2) on top of the 100.00 base
        let (catalog, base, cheese, _) = fixture();
        let mut pizza = Pizza::new("Cheese", &base, Size::Medium, Mode::Basic, None).unwrap();
        pizza.add_ingredients_basic(&cheese, 2).unwrap();
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000 + 8 * 6000);
    }

    #[test]
    fn test_single_slice_and_range_bounds() {
        let (_, base, cheese, _) = fixture();
        let mut pizza = Pizza::new("P", &base, Size::Medium, Mode::Parts, None).unwrap();

        pizza.add_ingredient_to_slice(1, &cheese, 1).unwrap();
        pizza.add_ingredient_to_slice(8, &cheese, 1).unwrap();
        assert!(matches!(
            pizza.add_ingredient_to_slice(0, &cheese, 1),
            Err(CoreError::OutOfRange { .. })
        ));
        assert!(pizza.add_ingredient_to_slice(9, &cheese, 1).is_err());

        pizza.add_ingredient_parts(&cheese, 1, 3, 5).unwrap();
        assert_eq!(pizza.slices()[2].portions().len(), 1);
        assert_eq!(pizza.slices()[4].portions().len(), 1);
        assert!(pizza.slices()[5].portions().is_empty());

        // a medium pizza has 8 slices, so 1..=12 is out of range
        assert!(matches!(
            pizza.add_ingredient_parts(&cheese, 1, 1, 12),
            Err(CoreError::OutOfRange { end: 12, count: 8, .. })
        ));
        // inverted range
        assert!(pizza.add_ingredient_parts(&cheese, 1, 5, 3).is_err());
    }

    #[test]
    fn test_halves_merge_replaces_ingredients() {
        let (_, base, cheese, tomatoes) = fixture();
        let mut a = Pizza::new("A", &base, Size::Medium, Mode::Basic, None).unwrap();
        a.add_ingredients_basic(&cheese, 2).unwrap();
        let mut b = Pizza::new("B", &base, Size::Medium, Mode::Basic, None).unwrap();
        b.add_ingredients_basic(&tomatoes, 1).unwrap();

        let mut target = Pizza::new("Mix", &base, Size::Medium, Mode::Halves, None).unwrap();
        // pre-existing customization is replaced, not merged into
        target.add_ingredients_basic(&tomatoes, 2).unwrap();
        target.apply_halves_from(&a, &b).unwrap();

        for slice in &target.slices()[..4] {
            assert_eq!(slice.portions().len(), 1);
            assert_eq!(slice.portions()[0].ingredient(), cheese.id());
            assert_eq!(slice.portions()[0].multiplier(), 2);
        }
        for slice in &target.slices()[4..] {
            assert_eq!(slice.portions().len(), 1);
            assert_eq!(slice.portions()[0].ingredient(), tomatoes.id());
        }
    }

    #[test]
    fn test_halves_merge_size_mismatch() {
        let (_, base, _, _) = fixture();
        let small = Pizza::new("S", &base, Size::Small, Mode::Basic, None).unwrap();
        let medium = Pizza::new("M", &base, Size::Medium, Mode::Basic, None).unwrap();
        let mut target = Pizza::new("T", &base, Size::Medium, Mode::Halves, None).unwrap();

        assert!(matches!(
            target.apply_halves_from(&small, &medium),
            Err(CoreError::SizeMismatch { left: 6, right: 8 })
        ));
        // sources agree with each other but not with the target
        let small2 = Pizza::new("S2", &base, Size::Small, Mode::Basic, None).unwrap();
        assert!(matches!(
            target.apply_halves_from(&small, &small2),
            Err(CoreError::SizeMismatch { left: 8, right: 6 })
        ));
    }

    #[test]
    fn test_halves_midpoint_rule() {
        // small = 6 slices, mid = 3: first half 1..=3, second half 4..=6
        let (mut catalog, base, cheese, _) = fixture();
        let side = cheese_side(&mut catalog, &cheese);

        let mut pizza = Pizza::new("P", &base, Size::Small, Mode::Halves, None).unwrap();
        pizza.add_side_halves(Some(&side), Half::Second).unwrap();
        assert!(pizza.slices()[..3].iter().all(|s| s.side().is_none()));
        assert!(pizza.slices()[3..].iter().all(|s| s.side() == Some(side.id())));
    }

    #[test]
    fn test_distinct_sides_counted_once() {
        let (mut catalog, base, cheese, _) = fixture();
        let side = cheese_side(&mut catalog, &cheese); // 60.00

        let mut pizza = Pizza::new("P", &base, Size::Medium, Mode::Basic, None).unwrap();
        pizza.add_side_basic(Some(&side)).unwrap();

        // one side on all eight slices is billed once
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000 + 6000);
    }

    #[test]
    fn test_equal_priced_sides_are_both_counted() {
        let (mut catalog, base, cheese, _) = fixture();
        let first = cheese_side(&mut catalog, &cheese);
        let second = {
            let mut s = Side::new("Other cheese crust").unwrap();
            s.add_ingredient(&cheese, 2).unwrap();
            catalog.sides.push(s.clone());
            s
        };

        let mut pizza = Pizza::new("P", &base, Size::Medium, Mode::Parts, None).unwrap();
        pizza.add_side_parts(Some(&first), 1, 4).unwrap();
        pizza.add_side_parts(Some(&second), 5, 8).unwrap();

        // equal prices, different identities → both billed
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000 + 6000 + 6000);
    }

    #[test]
    fn test_banned_side_is_rejected_atomically() {
        let (mut catalog, base, cheese, _) = fixture();
        let mut side = cheese_side(&mut catalog, &cheese);

        let mut pizza = Pizza::new("P", &base, Size::Medium, Mode::Basic, None).unwrap();
        side.ban_pizza(pizza.id());

        let err = pizza.add_side_basic(Some(&side)).unwrap_err();
        assert!(matches!(err, CoreError::SideNotAllowed { .. }));
        // no slice was touched
        assert!(pizza.slices().iter().all(|s| s.side().is_none()));

        assert!(pizza.add_side_halves(Some(&side), Half::First).is_err());
        assert!(pizza.add_side_parts(Some(&side), 1, 2).is_err());
        assert!(pizza.set_side_to_slice(1, Some(&side)).is_err());

        // clearing with none always succeeds, banned or not
        pizza.add_side_basic(None).unwrap();

        side.unban_pizza(pizza.id());
        assert!(pizza.add_side_basic(Some(&side)).is_ok());
    }

    #[test]
    fn test_side_parts_out_of_range() {
        let (mut catalog, base, cheese, _) = fixture();
        let side = cheese_side(&mut catalog, &cheese);
        let mut pizza = Pizza::new("P", &base, Size::Medium, Mode::Parts, None).unwrap();

        assert!(matches!(
            pizza.add_side_parts(Some(&side), 1, 12),
            Err(CoreError::OutOfRange { end: 12, count: 8, .. })
        ));
    }

    #[test]
    fn test_resize_resets_slices() {
        let (mut catalog, base, cheese, _) = fixture();
        let side = cheese_side(&mut catalog, &cheese);

        let mut pizza = Pizza::new("P", &base, Size::Medium, Mode::Basic, None).unwrap();
        pizza.add_ingredients_basic(&cheese, 2).unwrap();
        pizza.add_side_basic(Some(&side)).unwrap();

        pizza.set_size(Size::Large);
        assert_eq!(pizza.slice_count(), 12);
        assert!(pizza.slices().iter().all(|s| s.portions().is_empty()));
        assert!(pizza.slices().iter().all(|s| s.side().is_none()));
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000);
    }

    #[test]
    fn test_ingredient_removal_and_clear() {
        let (mut catalog, base, cheese, tomatoes) = fixture();
        let side = cheese_side(&mut catalog, &cheese);

        let mut pizza = Pizza::new("P", &base, Size::Medium, Mode::Basic, None).unwrap();
        pizza.add_ingredients_basic(&cheese, 1).unwrap();
        pizza.add_ingredients_basic(&tomatoes, 1).unwrap();
        pizza.add_side_basic(Some(&side)).unwrap();

        pizza.remove_ingredient_everywhere(cheese.id());
        // removing an id that is no longer present is a no-op
        pizza.remove_ingredient_everywhere(cheese.id());
        assert!(pizza
            .slices()
            .iter()
            .all(|s| s.portions().iter().all(|p| p.ingredient() != cheese.id())));

        pizza.clear_ingredients_everywhere();
        assert!(pizza.slices().iter().all(|s| s.portions().is_empty()));
        // sides survive both removal paths: price is base + side only
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000 + 6000);
    }

    #[test]
    fn test_live_ingredient_price_flows_through() {
        let (mut catalog, base, cheese, _) = fixture();
        let mut pizza = Pizza::new("P", &base, Size::Small, Mode::Basic, None).unwrap();
        pizza.add_ingredients_basic(&cheese, 1).unwrap();
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000 + 6 * 3000);

        catalog.ingredients[0]
            .set_price(Money::from_cents(4000))
            .unwrap();
        assert_eq!(pizza.price(&catalog).unwrap().cents(), 10000 + 6 * 4000);
    }

    #[test]
    fn test_json_snapshot_round_trips() {
        let (_, base, cheese, _) = fixture();
        let mut pizza = Pizza::new("Cheese", &base, Size::Medium, Mode::Basic, None).unwrap();
        pizza.add_ingredients_basic(&cheese, 2).unwrap();

        let json = serde_json::to_string(&pizza).unwrap();
        let back: Pizza = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pizza);
    }

    #[test]
    fn test_describe_layout() {
        let (mut catalog, base, cheese, tomatoes) = fixture();
        let side = cheese_side(&mut catalog, &cheese);

        let mut pizza = Pizza::new("Margherita", &base, Size::Small, Mode::Basic, None).unwrap();
        pizza.add_ingredients_basic(&cheese, 1).unwrap();
        pizza.add_ingredient_to_slice(1, &tomatoes, 2).unwrap();
        pizza.set_side_to_slice(1, Some(&side)).unwrap();

        let text = pizza.describe(&catalog).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            // base 100.00 + 6×30.00 + 40.00 tomatoes + 60.00 side = 380.00
            "Pizza: Margherita, size: small, base: Classic, mode: whole, price: 380.00"
        );
        assert_eq!(
            lines.next().unwrap(),
            "  Slice 1: side=Cheese crust; ingredients=[Cheese x1, Tomatoes x2]"
        );
        assert_eq!(
            lines.next().unwrap(),
            "  Slice 2: side=none; ingredients=[Cheese x1]"
        );
        assert_eq!(text.lines().count(), 1 + 6);

        // a pure projection: calling it twice yields identical text
        assert_eq!(text, pizza.describe(&catalog).unwrap());
    }
}
