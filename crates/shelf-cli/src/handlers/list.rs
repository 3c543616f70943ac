use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use crate::context::InventoryContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_rows;
use crate::types::OutputFormat;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub fn handle(context: &InventoryContext, format: OutputFormat, expanded: bool) -> Result<()> {
    let store = context.store();
    let snapshot = store
        .fetch_and_wait(FETCH_TIMEOUT)
        .with_context(|| format!("failed to load {}", store.source_description()))?;

    let rows = present_rows(&snapshot.inventory, &context.classifier, |_| expanded);

    let stdout = io::stdout();
    let color = format == OutputFormat::Plain && stdout.is_terminal();
    let mut out = stdout.lock();
    ConsoleRenderer::new(color).render_inventory(&rows, format, &mut out)?;
    out.flush()?;
    Ok(())
}
