//! # Console Menu Loop
//!
//! Line-oriented menu over the [`Pizzeria`] facade: numbered choices in,
//! formatted listings out. Every `CoreError` is printed and the loop
//! re-prompts; nothing here is fatal.
//!
//! This layer holds no business rules; it only picks entities by listed
//! number and calls public facade/core operations.

use std::io::{self, Write};
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use tracing::warn;

use pizzeria_catalog::{CatalogView, Pizzeria};
use pizzeria_core::{
    Catalog, CoreResult, Half, Mode, Money, OrderId, Person, Pizza, PizzaId, Size,
};

/// Which pizza a customization session targets: a catalog entry or a pizza
/// already on an order.
#[derive(Clone, Copy)]
enum PizzaRef {
    Catalog(PizzaId),
    OnOrder(OrderId, PizzaId),
}

/// Runs the interactive loop until the user exits.
pub fn run(app: &mut Pizzeria) {
    loop {
        println!();
        println!("=== Pizzeria ===");
        println!("1) Ingredients");
        println!("2) Bases");
        println!("3) Sides");
        println!("4) Pizzas");
        println!("5) Orders");
        println!("6) Search");
        println!("0) Exit");

        match read_usize("> ") {
            0 => return,
            1 => ingredients_menu(app),
            2 => bases_menu(app),
            3 => sides_menu(app),
            4 => pizzas_menu(app),
            5 => orders_menu(app),
            6 => search_menu(app),
            other => println!("No such option: {other}"),
        }
    }
}

// =============================================================================
// Ingredients
// =============================================================================

fn ingredients_menu(app: &mut Pizzeria) {
    loop {
        println!();
        println!("--- Ingredients ---");
        for (i, ingredient) in app.ingredients().iter().enumerate() {
            println!("  {}. {} ({})", i + 1, ingredient.name(), ingredient.price());
        }
        println!("1) Create  2) Change price  3) Delete  0) Back");

        match read_usize("> ") {
            0 => return,
            1 => {
                let name = prompt("Name: ");
                let price = read_money("Price: ");
                report(app.create_ingredient(name, price));
            }
            2 => {
                let Some(id) = pick_ingredient(app) else { continue };
                let price = read_money("New price: ");
                report(app.update_ingredient_price(id, price));
            }
            3 => {
                let Some(id) = pick_ingredient(app) else { continue };
                report(app.delete_ingredient(id));
            }
            other => println!("No such option: {other}"),
        }
    }
}

// =============================================================================
// Bases
// =============================================================================

fn bases_menu(app: &mut Pizzeria) {
    loop {
        println!();
        println!("--- Bases (classic price: {}) ---", app.classic_price().get());
        for (i, base) in app.bases().iter().enumerate() {
            let kind = if base.is_classic() { "classic" } else { "custom" };
            println!("  {}. {} ({}, {})", i + 1, base.name(), base.price(), kind);
        }
        println!("1) Create classic  2) Create custom  3) Change price  4) Delete  0) Back");

        match read_usize("> ") {
            0 => return,
            1 => {
                let id = app.create_classic_base();
                println!("Created classic base {id}");
            }
            2 => {
                let name = prompt("Name: ");
                let price = read_money("Price: ");
                report(app.create_custom_base(name, price));
            }
            3 => {
                let Some(id) = pick_base(app) else { continue };
                let price = read_money("New price: ");
                report(app.update_base_price(id, price));
            }
            4 => {
                let Some(id) = pick_base(app) else { continue };
                report(app.delete_base(id));
            }
            other => println!("No such option: {other}"),
        }
    }
}

// =============================================================================
// Sides
// =============================================================================

fn sides_menu(app: &mut Pizzeria) {
    loop {
        println!();
        println!("--- Sides ---");
        for (i, side) in app.sides().iter().enumerate() {
            match side.price(&*app) {
                Ok(price) => println!("  {}. {} ({})", i + 1, side.name(), price),
                Err(err) => println!("  {}. {} (price unavailable: {err})", i + 1, side.name()),
            }
        }
        println!("1) Create  2) Add ingredient  3) Remove ingredient  4) Ban for pizza  5) Unban for pizza  6) Delete  0) Back");

        match read_usize("> ") {
            0 => return,
            1 => {
                let name = prompt("Name: ");
                report(app.create_side(name));
            }
            2 => {
                let Some(side) = pick_side(app) else { continue };
                let Some(ingredient) = pick_ingredient(app) else { continue };
                let mult = read_multiplier();
                report(app.side_add_ingredient(side, ingredient, mult));
            }
            3 => {
                let Some(side) = pick_side(app) else { continue };
                let Some(ingredient) = pick_ingredient(app) else { continue };
                report(app.side_remove_ingredient(side, ingredient));
            }
            4 => {
                let Some(side) = pick_side(app) else { continue };
                let Some(pizza) = pick_pizza(app) else { continue };
                report(app.ban_side_for_pizza(side, pizza));
            }
            5 => {
                let Some(side) = pick_side(app) else { continue };
                let Some(pizza) = pick_pizza(app) else { continue };
                report(app.unban_side_for_pizza(side, pizza));
            }
            6 => {
                let Some(side) = pick_side(app) else { continue };
                report(app.delete_side(side));
            }
            other => println!("No such option: {other}"),
        }
    }
}

// =============================================================================
// Pizzas
// =============================================================================

fn pizzas_menu(app: &mut Pizzeria) {
    loop {
        println!();
        println!("--- Pizzas ---");
        for (i, pizza) in app.pizzas().iter().enumerate() {
            match pizza.price(&*app) {
                Ok(price) => println!(
                    "  {}. {} ({}, {}, {})",
                    i + 1,
                    pizza.name(),
                    pizza.size(),
                    pizza.mode(),
                    price
                ),
                Err(err) => println!("  {}. {} (price unavailable: {err})", i + 1, pizza.name()),
            }
        }
        println!("1) Create  2) Describe  3) Customize  4) Merge halves  5) Delete  0) Back");

        match read_usize("> ") {
            0 => return,
            1 => {
                let name = prompt("Name: ");
                let Some(base) = pick_base(app) else { continue };
                let Some(size) = pick_size() else { continue };
                let Some(mode) = pick_mode() else { continue };
                report(app.create_pizza(name, base, size, mode, None));
            }
            2 => {
                let Some(id) = pick_pizza(app) else { continue };
                match app.pizza(id).and_then(|p| p.describe(&*app)) {
                    Ok(text) => print!("{text}"),
                    Err(err) => println!("Error: {err}"),
                }
            }
            3 => {
                let Some(id) = pick_pizza(app) else { continue };
                customize_pizza_menu(app, PizzaRef::Catalog(id));
            }
            4 => {
                println!("Target pizza:");
                let Some(target) = pick_pizza(app) else { continue };
                println!("First half from:");
                let Some(first) = pick_pizza(app) else { continue };
                println!("Second half from:");
                let Some(second) = pick_pizza(app) else { continue };
                // clone the sources so the target can be borrowed mutably
                let sources = app.pizza(first).map(|a| a.clone()).and_then(|a| {
                    app.pizza(second).map(|b| (a, b.clone()))
                });
                match sources {
                    Ok((a, b)) => report(flatten(
                        app.with_pizza(target, |_, pizza| pizza.apply_halves_from(&a, &b)),
                    )),
                    Err(err) => println!("Error: {err}"),
                }
            }
            5 => {
                let Some(id) = pick_pizza(app) else { continue };
                report(app.delete_pizza(id));
            }
            other => println!("No such option: {other}"),
        }
    }
}

/// Slice-level customization, shared between catalog pizzas and pizzas
/// already on an order.
fn customize_pizza_menu(app: &mut Pizzeria, target: PizzaRef) {
    loop {
        println!();
        println!("--- Customize ---");
        println!("1) Ingredient on all slices");
        println!("2) Ingredient on one slice");
        println!("3) Ingredient on a slice range");
        println!("4) Remove ingredient everywhere");
        println!("5) Clear all ingredients");
        println!("6) Side on all slices");
        println!("7) Side on a half");
        println!("8) Side on a slice range");
        println!("9) Side on one slice");
        println!("10) Change size (resets slices)");
        println!("11) Show");
        println!("0) Back");

        match read_usize("> ") {
            0 => return,
            1 => {
                let Some(ingredient) = pick_ingredient(app) else { continue };
                let mult = read_multiplier();
                report(with_target(app, target, move |view, pizza| {
                    pizza.add_ingredients_basic(view.require_ingredient(ingredient)?, mult)
                }));
            }
            2 => {
                let Some(ingredient) = pick_ingredient(app) else { continue };
                let mult = read_multiplier();
                let slice = read_usize("Slice number: ");
                report(with_target(app, target, move |view, pizza| {
                    pizza.add_ingredient_to_slice(slice, view.require_ingredient(ingredient)?, mult)
                }));
            }
            3 => {
                let Some(ingredient) = pick_ingredient(app) else { continue };
                let mult = read_multiplier();
                let start = read_usize("From slice: ");
                let end = read_usize("To slice: ");
                report(with_target(app, target, move |view, pizza| {
                    pizza.add_ingredient_parts(view.require_ingredient(ingredient)?, mult, start, end)
                }));
            }
            4 => {
                let Some(ingredient) = pick_ingredient(app) else { continue };
                report(with_target(app, target, move |_, pizza| {
                    pizza.remove_ingredient_everywhere(ingredient);
                    Ok(())
                }));
            }
            5 => {
                report(with_target(app, target, |_, pizza| {
                    pizza.clear_ingredients_everywhere();
                    Ok(())
                }));
            }
            6 => {
                let side = pick_side_or_none(app);
                report(with_target(app, target, move |view, pizza| {
                    pizza.add_side_basic(resolve_side(view, side)?)
                }));
            }
            7 => {
                let side = pick_side_or_none(app);
                let Some(half) = read_half() else { continue };
                report(with_target(app, target, move |view, pizza| {
                    pizza.add_side_halves(resolve_side(view, side)?, half)
                }));
            }
            8 => {
                let side = pick_side_or_none(app);
                let start = read_usize("From slice: ");
                let end = read_usize("To slice: ");
                report(with_target(app, target, move |view, pizza| {
                    pizza.add_side_parts(resolve_side(view, side)?, start, end)
                }));
            }
            9 => {
                let side = pick_side_or_none(app);
                let slice = read_usize("Slice number: ");
                report(with_target(app, target, move |view, pizza| {
                    pizza.set_side_to_slice(slice, resolve_side(view, side)?)
                }));
            }
            10 => {
                let Some(size) = pick_size() else { continue };
                report(with_target(app, target, move |_, pizza| {
                    pizza.set_size(size);
                    Ok(())
                }));
            }
            11 => {
                match with_target(app, target, |view, pizza| pizza.describe(view)) {
                    Ok(text) => print!("{text}"),
                    Err(err) => println!("Error: {err}"),
                }
            }
            other => println!("No such option: {other}"),
        }
    }
}

fn with_target<R>(
    app: &mut Pizzeria,
    target: PizzaRef,
    f: impl FnOnce(&CatalogView<'_>, &mut Pizza) -> CoreResult<R>,
) -> CoreResult<R> {
    let nested = match target {
        PizzaRef::Catalog(id) => app.with_pizza(id, f),
        PizzaRef::OnOrder(order, pizza) => app.with_order_pizza(order, pizza, f),
    };
    flatten(nested)
}

fn flatten<R>(nested: CoreResult<CoreResult<R>>) -> CoreResult<R> {
    nested.and_then(|inner| inner)
}

fn resolve_side<'a>(
    view: &'a CatalogView<'_>,
    side: Option<pizzeria_core::SideId>,
) -> CoreResult<Option<&'a pizzeria_core::Side>> {
    match side {
        Some(id) => Ok(Some(view.require_side(id)?)),
        None => Ok(None),
    }
}

// =============================================================================
// Orders
// =============================================================================

fn orders_menu(app: &mut Pizzeria) {
    loop {
        println!();
        println!("--- Orders ---");
        for (i, order) in app.orders().iter().enumerate() {
            match order.total_price(&*app) {
                Ok(total) => println!(
                    "  {}. Order {} ({} pizzas, {} guests, total {})",
                    i + 1,
                    order.name(),
                    order.all_pizzas().count(),
                    order.guests().len(),
                    total
                ),
                Err(err) => println!("  {}. Order {} (total unavailable: {err})", i + 1, order.name()),
            }
        }
        println!("1) Create  2) Manage  3) Delete  0) Back");

        match read_usize("> ") {
            0 => return,
            1 => {
                let name = prompt("Order number: ");
                report(app.create_order(name));
            }
            2 => {
                let Some(id) = pick_order(app) else { continue };
                manage_order_menu(app, id);
            }
            3 => {
                let Some(id) = pick_order(app) else { continue };
                report(app.delete_order(id));
            }
            other => println!("No such option: {other}"),
        }
    }
}

fn manage_order_menu(app: &mut Pizzeria, order_id: OrderId) {
    loop {
        println!();
        println!("--- Order ---");
        println!("1) Show");
        println!("2) Add pizza from catalog");
        println!("3) Add custom pizza");
        println!("4) Customize a pizza");
        println!("5) Remove pizza");
        println!("6) Add guest");
        println!("7) Remove guest");
        println!("8) Assign guest to pizza");
        println!("9) Unassign guest from pizza");
        println!("10) Split bills");
        println!("11) Set comment");
        println!("12) Postpone");
        println!("0) Back");

        match read_usize("> ") {
            0 => return,
            1 => match app.order(order_id).and_then(|o| o.describe(&*app)) {
                Ok(text) => print!("{text}"),
                Err(err) => println!("Error: {err}"),
            },
            2 => {
                let Some(pizza) = pick_pizza(app) else { continue };
                // copy first: per-order customization must never reach the
                // shared catalog instance
                match app.copy_pizza_for_order(pizza) {
                    Ok(copy) => {
                        report(app.with_order(order_id, |_, order| {
                            order.add_pizza(copy);
                        }));
                    }
                    Err(err) => println!("Error: {err}"),
                }
            }
            3 => {
                let name = prompt("Name: ");
                let Some(base) = pick_base(app) else { continue };
                let Some(size) = pick_size() else { continue };
                let Some(mode) = pick_mode() else { continue };
                match app.create_order_pizza(name, base, size, mode) {
                    Ok(pizza) => {
                        report(app.with_order(order_id, |_, order| {
                            order.add_custom_pizza(pizza);
                        }));
                    }
                    Err(err) => println!("Error: {err}"),
                }
            }
            4 => {
                let Some(pizza) = pick_order_pizza(app, order_id) else { continue };
                customize_pizza_menu(app, PizzaRef::OnOrder(order_id, pizza));
            }
            5 => {
                let Some(pizza) = pick_order_pizza(app, order_id) else { continue };
                report(app.with_order(order_id, |_, order| {
                    order.remove_pizza(pizza);
                }));
            }
            6 => {
                let name = prompt("Guest name: ");
                match Person::new(name) {
                    Ok(guest) => {
                        report(app.with_order(order_id, |_, order| {
                            order.add_guest(guest);
                        }));
                    }
                    Err(err) => println!("Error: {err}"),
                }
            }
            7 => {
                let Some(guest) = pick_guest(app, order_id) else { continue };
                report(app.with_order(order_id, |_, order| {
                    order.remove_guest(guest);
                }));
            }
            8 => {
                let Some(pizza) = pick_order_pizza(app, order_id) else { continue };
                let Some(guest) = pick_guest(app, order_id) else { continue };
                report(app.with_order(order_id, |_, order| {
                    order.add_guest_to_pizza(pizza, guest);
                }));
            }
            9 => {
                let Some(pizza) = pick_order_pizza(app, order_id) else { continue };
                let Some(guest) = pick_guest(app, order_id) else { continue };
                report(app.with_order(order_id, |_, order| {
                    order.remove_guest_from_pizza(pizza, guest);
                }));
            }
            10 => match app.order(order_id).and_then(|o| o.split_bills(&*app)) {
                Ok(bills) => {
                    let order = match app.order(order_id) {
                        Ok(order) => order,
                        Err(err) => {
                            println!("Error: {err}");
                            continue;
                        }
                    };
                    println!("Split by guest:");
                    for guest in order.guests() {
                        let amount = bills
                            .get(&guest.id())
                            .copied()
                            .unwrap_or_else(Money::zero);
                        println!("  {}: {}", guest.name(), amount);
                    }
                }
                Err(err) => println!("Error: {err}"),
            },
            11 => {
                let comment = prompt("Comment (empty to clear): ");
                let comment = if comment.is_empty() { None } else { Some(comment) };
                report(app.with_order(order_id, |_, order| {
                    order.set_comment(comment);
                }));
            }
            12 => {
                let Some(date) = read_date() else { continue };
                let Some(time) = read_time() else { continue };
                let Some(offset) = read_offset() else { continue };
                report(flatten(app.with_order(order_id, |_, order| {
                    order.postpone_to(date, time, offset)
                })));
            }
            other => println!("No such option: {other}"),
        }
    }
}

// =============================================================================
// Search
// =============================================================================

fn search_menu(app: &Pizzeria) {
    println!();
    println!("--- Search ---");
    println!("1) Pizzas with ingredient");
    println!("2) Pizzas by size");
    println!("3) Pizzas by mode");
    println!("4) Orders totaling more than");
    println!("5) Orders with at least N guests");
    println!("0) Back");

    match read_usize("> ") {
        0 => {}
        1 => {
            let Some(id) = pick_ingredient(app) else { return };
            for pizza in app.pizzas_with_ingredient(id) {
                println!("  {}", pizza.name());
            }
        }
        2 => {
            let Some(size) = pick_size() else { return };
            for pizza in app.pizzas_by_size(size) {
                println!("  {}", pizza.name());
            }
        }
        3 => {
            let Some(mode) = pick_mode() else { return };
            for pizza in app.pizzas_by_mode(mode) {
                println!("  {}", pizza.name());
            }
        }
        4 => {
            let min = read_money("Minimum total: ");
            match app.orders_totaling_more_than(min) {
                Ok(orders) => {
                    for order in orders {
                        println!("  Order {}", order.name());
                    }
                }
                Err(err) => println!("Error: {err}"),
            }
        }
        5 => {
            let n = read_usize("Minimum guests: ");
            for order in app.orders_with_min_guests(n) {
                println!("  Order {}", order.name());
            }
        }
        other => println!("No such option: {other}"),
    }
}

// =============================================================================
// Entity Pickers
// =============================================================================

fn pick_from<K: Copy>(label: &str, entries: Vec<(String, K)>) -> Option<K> {
    if entries.is_empty() {
        println!("Nothing to pick: no {label} yet");
        return None;
    }
    for (i, (name, _)) in entries.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
    let n = read_usize(&format!("Pick {label} (0 to cancel): "));
    if n == 0 || n > entries.len() {
        return None;
    }
    Some(entries[n - 1].1)
}

fn pick_ingredient(app: &Pizzeria) -> Option<pizzeria_core::IngredientId> {
    let entries = app
        .ingredients()
        .iter()
        .map(|i| (format!("{} ({})", i.name(), i.price()), i.id()))
        .collect();
    pick_from("ingredient", entries)
}

fn pick_base(app: &Pizzeria) -> Option<pizzeria_core::BaseId> {
    let entries = app
        .bases()
        .iter()
        .map(|b| (format!("{} ({})", b.name(), b.price()), b.id()))
        .collect();
    pick_from("base", entries)
}

fn pick_side(app: &Pizzeria) -> Option<pizzeria_core::SideId> {
    let entries = app
        .sides()
        .iter()
        .map(|s| (s.name().to_string(), s.id()))
        .collect();
    pick_from("side", entries)
}

/// A side, or none to clear side assignments.
fn pick_side_or_none(app: &Pizzeria) -> Option<pizzeria_core::SideId> {
    println!("(cancel the pick to clear the side instead)");
    pick_side(app)
}

fn pick_pizza(app: &Pizzeria) -> Option<PizzaId> {
    let entries = app
        .pizzas()
        .iter()
        .map(|p| (format!("{} ({})", p.name(), p.size()), p.id()))
        .collect();
    pick_from("pizza", entries)
}

fn pick_order(app: &Pizzeria) -> Option<OrderId> {
    let entries = app
        .orders()
        .iter()
        .map(|o| (format!("Order {}", o.name()), o.id()))
        .collect();
    pick_from("order", entries)
}

fn pick_order_pizza(app: &Pizzeria, order_id: OrderId) -> Option<PizzaId> {
    let order = match app.order(order_id) {
        Ok(order) => order,
        Err(err) => {
            println!("Error: {err}");
            return None;
        }
    };
    let entries = order
        .all_pizzas()
        .map(|p| (format!("{} ({})", p.name(), p.size()), p.id()))
        .collect();
    pick_from("pizza", entries)
}

fn pick_guest(app: &Pizzeria, order_id: OrderId) -> Option<pizzeria_core::PersonId> {
    let order = match app.order(order_id) {
        Ok(order) => order,
        Err(err) => {
            println!("Error: {err}");
            return None;
        }
    };
    let entries = order
        .guests()
        .iter()
        .map(|g| (g.name().to_string(), g.id()))
        .collect();
    pick_from("guest", entries)
}

fn pick_size() -> Option<Size> {
    let entries = Size::ALL
        .iter()
        .map(|s| {
            (
                format!("{} ({} cm, {} slices)", s, s.diameter_cm(), s.slice_count()),
                *s,
            )
        })
        .collect();
    pick_from("size", entries)
}

fn pick_mode() -> Option<Mode> {
    let entries = Mode::ALL.iter().map(|m| (m.to_string(), *m)).collect();
    pick_from("mode", entries)
}

// =============================================================================
// Input Helpers
// =============================================================================

fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        warn!("stdin read failed");
        return String::new();
    }
    line.trim().to_string()
}

fn read_usize(message: &str) -> usize {
    loop {
        let line = prompt(message);
        match line.parse() {
            Ok(n) => return n,
            Err(_) => println!("Enter a number"),
        }
    }
}

fn read_multiplier() -> u8 {
    loop {
        let line = prompt("Multiplier (1 or 2): ");
        match line.parse() {
            Ok(n) => return n,
            Err(_) => println!("Enter 1 or 2"),
        }
    }
}

fn read_half() -> Option<Half> {
    let line = prompt("Half (A or B): ");
    match Half::from_str(&line) {
        Ok(half) => Some(half),
        Err(err) => {
            println!("Error: {err}");
            None
        }
    }
}

/// Parses `"115"` or `"115.50"` into Money.
pub fn parse_money(input: &str) -> Option<Money> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (major_str, minor_str) = match digits.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (digits, ""),
    };

    if major_str.is_empty() && minor_str.is_empty() {
        return None;
    }
    if minor_str.len() > 2 {
        return None;
    }

    let major: i64 = if major_str.is_empty() {
        0
    } else {
        major_str.parse().ok()?
    };
    let minor: i64 = if minor_str.is_empty() {
        0
    } else {
        // "5" means 50 cents, "05" means 5 cents
        let parsed: i64 = minor_str.parse().ok()?;
        if minor_str.len() == 1 {
            parsed * 10
        } else {
            parsed
        }
    };

    let money = Money::from_major_minor(major, minor);
    Some(if negative { Money::zero() - money } else { money })
}

fn read_money(message: &str) -> Money {
    loop {
        let line = prompt(message);
        match parse_money(&line) {
            Some(money) => return money,
            None => println!("Enter an amount like 115 or 115.50"),
        }
    }
}

fn read_date() -> Option<NaiveDate> {
    let line = prompt("Date (YYYY-MM-DD): ");
    match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            println!("Enter a date like 2026-12-31");
            None
        }
    }
}

fn read_time() -> Option<NaiveTime> {
    let line = prompt("Time (HH:MM): ");
    match NaiveTime::parse_from_str(&line, "%H:%M") {
        Ok(time) => Some(time),
        Err(_) => {
            println!("Enter a time like 18:30");
            None
        }
    }
}

fn read_offset() -> Option<FixedOffset> {
    let line = prompt("UTC offset in hours (e.g. 3 or -5): ");
    let hours: i32 = match line.parse() {
        Ok(h) => h,
        Err(_) => {
            println!("Enter a whole number of hours");
            return None;
        }
    };
    match FixedOffset::east_opt(hours * 3600) {
        Some(offset) => Some(offset),
        None => {
            println!("Offset out of range");
            None
        }
    }
}

fn report<T>(result: CoreResult<T>) {
    if let Err(err) = result {
        println!("Error: {err}");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("115").unwrap().cents(), 11500);
        assert_eq!(parse_money("115.50").unwrap().cents(), 11550);
        assert_eq!(parse_money("115.5").unwrap().cents(), 11550);
        assert_eq!(parse_money("0.05").unwrap().cents(), 5);
        assert_eq!(parse_money(" 30 ").unwrap().cents(), 3000);
        assert!(parse_money("").is_none());
        assert!(parse_money("12.345").is_none());
        assert!(parse_money("abc").is_none());
    }
}
