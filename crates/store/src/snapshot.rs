//! Whole-inventory JSON snapshots.
//!
//! The on-disk format is a single flat JSON object mapping item names to
//! integer stock levels, e.g. `{"apple": 7, "banana": -2}`.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use stockroom_inventory::Inventory;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "inventory.json";

/// Snapshot persistence error.
///
/// Only `save` surfaces these; `load` degrades to an empty inventory instead.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the inventory snapshot at `path`, replacing any previous state.
///
/// A missing file yields an empty inventory (first run, not an error). Any
/// other failure, unreadable file or malformed JSON, is logged as a warning
/// and also yields an empty inventory; partial or corrupt state is never
/// kept.
pub fn load(path: impl AsRef<Path>) -> Inventory {
    let path = path.as_ref();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Inventory::new(),
        Err(e) => {
            tracing::warn!("failed to read snapshot {}: {e}; starting empty", path.display());
            return Inventory::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(inventory) => inventory,
        Err(e) => {
            tracing::warn!(
                "snapshot {} contains invalid JSON: {e}; starting empty",
                path.display()
            );
            Inventory::new()
        }
    }
}

/// Serialize the whole inventory to `path`, overwriting any previous
/// snapshot.
///
/// Not atomic: there is no rename-into-place or backup, so a crash mid-write
/// can corrupt the file. Failures propagate to the caller.
pub fn save(path: impl AsRef<Path>, inventory: &Inventory) -> Result<(), SnapshotError> {
    let encoded = serde_json::to_string(inventory)?;
    fs::write(path.as_ref(), encoded)?;
    Ok(())
}
