use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::presentation::formatters::truncate_with_ellipsis;
use crate::presentation::view_models::{ImageViewModel, ProductRowViewModel};
use crate::types::OutputFormat;

const MAX_NAME_WIDTH: usize = 40;

/// Line-oriented output for non-interactive commands.
pub struct ConsoleRenderer {
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render_inventory<W: Write>(
        &self,
        rows: &[ProductRowViewModel],
        format: OutputFormat,
        out: &mut W,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?;
            }
            OutputFormat::Plain => self.render_plain(rows, out)?,
        }
        Ok(())
    }

    fn render_plain<W: Write>(&self, rows: &[ProductRowViewModel], out: &mut W) -> Result<()> {
        if rows.is_empty() {
            writeln!(out, "No products in inventory.")?;
            return Ok(());
        }

        let name_width = rows
            .iter()
            .map(|row| row.name.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_NAME_WIDTH);

        for row in rows {
            let name = truncate_with_ellipsis(&row.name, name_width);
            let padded = format!("{:<width$}", name, width = name_width);

            if self.color {
                write!(out, "{}  {}", padded.bold(), row.posted.dimmed())?;
            } else {
                write!(out, "{}  {}", padded, row.posted)?;
            }

            if row.is_new {
                if self.color {
                    write!(out, "  {}", "NEW".green().bold())?;
                } else {
                    write!(out, "  NEW")?;
                }
            }
            writeln!(out)?;

            if row.expanded {
                let categories = if row.categories.is_empty() {
                    "-".to_string()
                } else {
                    row.categories.join(", ")
                };
                let image = match &row.image {
                    ImageViewModel::Remote { uri } => uri.as_str(),
                    ImageViewModel::Placeholder => "placeholder",
                };
                writeln!(out, "    categories: {}", categories)?;
                writeln!(out, "    image: {}", image)?;
            }
        }

        Ok(())
    }
}
