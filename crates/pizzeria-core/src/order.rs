//! # Order & Billing
//!
//! An [`Order`] bundles pizzas, guests and a per-pizza guest assignment map,
//! and computes the total price plus a fair, penny-exact split.
//!
//! ## The Split Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  splitBills: penny-exact, remainder to the first eater                 │
//! │                                                                         │
//! │  For each pizza with n >= 1 assigned guests:                            │
//! │                                                                         │
//! │    price 100.00, n = 3                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    share = floor(price / n) = 33.33   (nobody overpays)                 │
//! │    remainder = price − share × n = 0.01                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    guest 1: 33.33 + 0.01 = 33.34  ◄── whole remainder, first eater      │
//! │    guest 2: 33.33                                                       │
//! │    guest 3: 33.33                                                       │
//! │                                  Σ = 100.00 exactly                     │
//! │                                                                         │
//! │  Guests assigned to nothing stay at 0.00. A pizza with zero assigned    │
//! │  guests reaches nobody's bill; its cost stays on the order total only. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog pizzas are copied by the service facade *before* they are added
//! here, so order-local customization never mutates the shared catalog
//! instance. The order's own invariant: every pizza it holds, from the
//! catalog or built custom, has an assignment entry keyed by its id.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pizza::Pizza;
use crate::types::{OrderId, Person, PersonId, PizzaId};
use crate::validation::validate_name;

// =============================================================================
// Order
// =============================================================================

/// An order: pizzas, guests, assignments, and a scheduled time that can
/// only move forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    name: String,
    time: DateTime<Utc>,
    comment: Option<String>,
    /// Pizzas taken from the catalog (as order-local copies).
    pizzas: Vec<Pizza>,
    /// Pizzas built from scratch for this order.
    custom_pizzas: Vec<Pizza>,
    guests: Vec<Person>,
    assignments: HashMap<PizzaId, Vec<PersonId>>,
}

impl Order {
    /// Creates an order scheduled for the current moment.
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Order {
            id: OrderId::new(),
            name,
            time: Utc::now(),
            comment: None,
            pizzas: Vec::new(),
            custom_pizzas: Vec::new(),
            guests: Vec::new(),
            assignments: HashMap::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    #[inline]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    #[inline]
    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    #[inline]
    pub fn custom_pizzas(&self) -> &[Pizza] {
        &self.custom_pizzas
    }

    #[inline]
    pub fn guests(&self) -> &[Person] {
        &self.guests
    }

    /// All pizzas on the order, catalog copies first.
    pub fn all_pizzas(&self) -> impl Iterator<Item = &Pizza> {
        self.pizzas.iter().chain(self.custom_pizzas.iter())
    }

    /// Guests assigned to the given pizza, in assignment order.
    pub fn guests_for(&self, pizza: PizzaId) -> &[PersonId] {
        self.assignments.get(&pizza).map_or(&[], Vec::as_slice)
    }

    /// Looks up a pizza on this order by id.
    pub fn pizza(&self, id: PizzaId) -> Option<&Pizza> {
        self.all_pizzas().find(|p| p.id() == id)
    }

    /// Mutable access to a pizza on this order, for per-order customization.
    pub fn pizza_mut(&mut self, id: PizzaId) -> Option<&mut Pizza> {
        self.pizzas
            .iter_mut()
            .chain(self.custom_pizzas.iter_mut())
            .find(|p| p.id() == id)
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// Adds a catalog-derived pizza (already copied by the facade) and its
    /// empty assignment entry.
    pub fn add_pizza(&mut self, pizza: Pizza) {
        self.assignments.insert(pizza.id(), Vec::new());
        self.pizzas.push(pizza);
    }

    /// Adds an order-local custom pizza and its empty assignment entry.
    pub fn add_custom_pizza(&mut self, pizza: Pizza) {
        self.assignments.insert(pizza.id(), Vec::new());
        self.custom_pizzas.push(pizza);
    }

    /// Removes the pizza from whichever list holds it and drops its
    /// assignment entry. Unknown ids are a no-op.
    pub fn remove_pizza(&mut self, pizza: PizzaId) {
        self.pizzas.retain(|p| p.id() != pizza);
        self.custom_pizzas.retain(|p| p.id() != pizza);
        self.assignments.remove(&pizza);
    }

    /// Registers a guest on this order.
    pub fn add_guest(&mut self, guest: Person) {
        self.guests.push(guest);
    }

    /// Removes the guest from the order and from every pizza's assignment
    /// list.
    pub fn remove_guest(&mut self, guest: PersonId) {
        self.guests.retain(|g| g.id() != guest);
        for eaters in self.assignments.values_mut() {
            eaters.retain(|id| *id != guest);
        }
    }

    /// Assigns a guest to a pizza. An assignment entry is created on demand
    /// for a pizza id not yet tracked.
    pub fn add_guest_to_pizza(&mut self, pizza: PizzaId, guest: PersonId) {
        self.assignments.entry(pizza).or_default().push(guest);
    }

    /// Unassigns a guest from a pizza. Unknown pizza or guest is a no-op.
    pub fn remove_guest_from_pizza(&mut self, pizza: PizzaId, guest: PersonId) {
        if let Some(eaters) = self.assignments.get_mut(&pizza) {
            eaters.retain(|id| *id != guest);
        }
    }

    // -------------------------------------------------------------------------
    // Scheduling
    // -------------------------------------------------------------------------

    /// Reschedules the order. Fails with `PastTime` when the instant is
    /// before the current moment of evaluation.
    pub fn set_time(&mut self, time: DateTime<Utc>) -> CoreResult<()> {
        if time < Utc::now() {
            return Err(CoreError::PastTime { requested: time });
        }
        self.time = time;
        Ok(())
    }

    /// Composes a local date and time in the given zone offset into an
    /// instant and delegates to [`Order::set_time`].
    pub fn postpone_to(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        offset: FixedOffset,
    ) -> CoreResult<()> {
        let local = date.and_time(time);
        let instant = local
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| CoreError::InvalidArgument {
                reason: format!("{local} does not exist in offset {offset}"),
            })?;
        self.set_time(instant.with_timezone(&Utc))
    }

    // -------------------------------------------------------------------------
    // Billing
    // -------------------------------------------------------------------------

    /// Sum of all pizza prices on the order, catalog copies and custom
    /// pizzas alike.
    pub fn total_price<C: Catalog + ?Sized>(&self, catalog: &C) -> CoreResult<Money> {
        let mut total = Money::zero();
        for pizza in self.all_pizzas() {
            total += pizza.price(catalog)?;
        }
        Ok(total)
    }

    /// Splits every pizza's price across its assigned guests, penny-exact.
    ///
    /// Each assigned guest is credited the floored-to-cents share; the
    /// leftover cents go, whole, to the first guest in assignment order,
    /// so the credited shares for a pizza always sum to its exact price.
    /// Guests with no assignments end at zero; pizzas with no assigned
    /// guests credit nobody.
    pub fn split_bills<C: Catalog + ?Sized>(
        &self,
        catalog: &C,
    ) -> CoreResult<HashMap<PersonId, Money>> {
        let mut bills: HashMap<PersonId, Money> = self
            .guests
            .iter()
            .map(|g| (g.id(), Money::zero()))
            .collect();

        for pizza in self.all_pizzas() {
            let eaters = self.guests_for(pizza.id());
            if eaters.is_empty() {
                continue;
            }

            let price = pizza.price(catalog)?;
            let Some((share, remainder)) = price.split_among(eaters.len()) else {
                continue;
            };

            for eater in eaters {
                *bills.entry(*eater).or_insert_with(Money::zero) += share;
            }
            if remainder.is_positive() {
                *bills.entry(eaters[0]).or_insert_with(Money::zero) += remainder;
            }
        }

        Ok(bills)
    }

    // -------------------------------------------------------------------------
    // Description
    // -------------------------------------------------------------------------

    /// Deterministic multi-line summary: header, every pizza's description,
    /// the total, and the per-guest split. A pure read projection.
    pub fn describe<C: Catalog + ?Sized>(&self, catalog: &C) -> CoreResult<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Order {}", self.name);
        let _ = writeln!(out, "Time: {}", self.time);
        let _ = writeln!(out, "Comment: {}", self.comment.as_deref().unwrap_or("-"));
        out.push('\n');

        for pizza in &self.pizzas {
            out.push_str(&pizza.describe(catalog)?);
            out.push('\n');
        }

        if !self.custom_pizzas.is_empty() {
            out.push_str("\nCustom pizzas:\n");
            for pizza in &self.custom_pizzas {
                out.push_str("[custom] ");
                out.push_str(&pizza.describe(catalog)?);
                out.push('\n');
            }
        }

        let _ = writeln!(out, "Total: {}", self.total_price(catalog)?);

        let bills = self.split_bills(catalog)?;
        out.push_str("Split by guest:\n");
        for guest in &self.guests {
            let amount = bills.get(&guest.id()).copied().unwrap_or_else(Money::zero);
            let _ = writeln!(out, "  {}: {}", guest.name(), amount);
        }
        Ok(out)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
