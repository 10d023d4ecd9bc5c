//! `stockroom` binary: runs the reference stock scenario end to end.
//!
//! Takes no flags; logging verbosity is controlled via `RUST_LOG`.

use anyhow::Context;

use stockroom_core::{ItemName, Quantity};
use stockroom_inventory::{Inventory, Journal, LOW_STOCK_THRESHOLD};
use stockroom_store::DEFAULT_SNAPSHOT_PATH;

/// Add raw input through the typed boundary.
///
/// An absent item is a skip; a name or quantity that fails to parse is
/// warned about and skipped (non-fatal, the store is never touched).
fn add_raw(inventory: &mut Inventory, journal: &mut Journal, item: Option<&str>, qty: &str) {
    let Some(item) = item else {
        return;
    };
    let name = match ItemName::parse(item) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("skipping add of {item:?}: {e}");
            return;
        }
    };
    match Quantity::parse(qty) {
        Ok(qty) => {
            inventory.add(&name, qty, journal);
        }
        Err(e) => tracing::warn!("skipping add of {name}: {e}"),
    }
}

/// Remove raw input through the typed boundary; same skip rules as [`add_raw`].
fn remove_raw(inventory: &mut Inventory, item: Option<&str>, qty: &str) {
    let Some(item) = item else {
        return;
    };
    let name = match ItemName::parse(item) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("skipping removal of {item:?}: {e}");
            return;
        }
    };
    match Quantity::parse(qty) {
        Ok(qty) => inventory.remove(&name, qty),
        Err(e) => tracing::warn!("skipping removal of {name}: {e}"),
    }
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let mut inventory = Inventory::new();
    let mut journal = Journal::new();

    add_raw(&mut inventory, &mut journal, Some("apple"), "10");
    // Negative add: allowed as a corrective adjustment.
    add_raw(&mut inventory, &mut journal, Some("banana"), "-2");
    // Quantity "ten" cannot be parsed; warned about and skipped.
    add_raw(&mut inventory, &mut journal, Some("123"), "ten");

    remove_raw(&mut inventory, Some("apple"), "3");
    // Absent item: no-op.
    remove_raw(&mut inventory, Some("orange"), "1");

    let apple = ItemName::parse("apple")?;
    println!("Apple stock: {}", inventory.quantity_of(&apple));

    let low = inventory.low_items(LOW_STOCK_THRESHOLD);
    let low: Vec<&str> = low.iter().map(ItemName::as_str).collect();
    println!("Low items: {low:?}");

    save_and_reload(&mut inventory)?;

    print!("{}", inventory.render_report());

    for entry in journal.entries() {
        tracing::info!("{entry}");
    }

    Ok(())
}

/// Persist the snapshot and replace the in-memory state with what was read
/// back, proving the round trip.
fn save_and_reload(inventory: &mut Inventory) -> anyhow::Result<()> {
    stockroom_store::save(DEFAULT_SNAPSHOT_PATH, inventory)
        .with_context(|| format!("failed to save snapshot to {DEFAULT_SNAPSHOT_PATH}"))?;
    *inventory = stockroom_store::load(DEFAULT_SNAPSHOT_PATH);
    Ok(())
}
