//! Inventory aging domain module.
//!
//! This crate contains the daily aging rules for a shop's catalog, implemented
//! purely as deterministic domain logic (no IO, no storage). Callers build an
//! [`Inventory`] from items and advance it one simulated day at a time.

pub mod fixtures;
pub mod inventory;
pub mod item;
pub mod kind;
pub mod thresholds;

mod rules;

pub use inventory::Inventory;
pub use item::Item;
pub use kind::{ItemKind, NamePolicy};
