//! `stockroom-store` — snapshot persistence for the inventory.
//!
//! The domain crates stay IO-free; everything touching the filesystem lives
//! here.

pub mod snapshot;

pub use snapshot::{DEFAULT_SNAPSHOT_PATH, SnapshotError, load, save};
