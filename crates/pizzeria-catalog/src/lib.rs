//! # pizzeria-catalog: Storage and Service Facade
//!
//! The layer between the pure core and the presentation loop:
//!
//! - [`repository`]: a generic identity-keyed in-memory store
//!   ([`MemoryRepository`]), one instance per entity kind. Nothing persists
//!   across process restarts by design.
//! - [`service`]: the [`Pizzeria`] facade: CRUD operations, the shared
//!   classic-price cell, seed data, catalog-copy-on-order, filter queries,
//!   and the focused-borrow seams (`with_pizza`, `with_order`,
//!   `with_order_pizza`) that let a caller customize one entity while the
//!   rest of the catalog stays readable.
//!
//! The core's [`Catalog`](pizzeria_core::Catalog) lookup trait is
//! implemented here, by [`Pizzeria`] itself and by the borrowed
//! [`CatalogView`].

pub mod repository;
pub mod service;

pub use repository::{Keyed, MemoryRepository};
pub use service::{CatalogView, Pizzeria};
