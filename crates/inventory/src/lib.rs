//! Inventory domain module.
//!
//! This crate contains business rules for stock tracking, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod journal;
pub mod store;

pub use journal::Journal;
pub use store::{Inventory, LOW_STOCK_THRESHOLD};
