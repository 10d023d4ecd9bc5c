//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the typed values that cross the input boundary.

pub mod error;
pub mod item;

pub use error::{StockError, StockResult};
pub use item::{ItemName, Quantity};
