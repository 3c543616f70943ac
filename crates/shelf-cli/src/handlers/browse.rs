//! Browse Handler
//!
//! Wires the store, navigator and classifier into the TUI renderer and hands
//! over control until the user quits.

use anyhow::Result;
use shelf_runtime::Navigator;

use crate::context::InventoryContext;
use crate::presentation::InventoryTui;

pub fn handle(context: &InventoryContext) -> Result<()> {
    let store = context.store();
    tracing::info!(source = %store.source_description(), "starting inventory browser");

    let tui = InventoryTui::new(store, Navigator::new(), context.classifier.clone());
    tui.run()
}
