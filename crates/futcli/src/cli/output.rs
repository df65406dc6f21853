//! Output format selection for command results.

use crate::render::{render_json, render_table, TableRow};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// How records are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with nested mappings flattened
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Render `records` in the chosen format.
pub fn render<R>(records: &[R], format: OutputFormat) -> Result<String>
where
    R: Serialize + TableRow,
{
    match format {
        OutputFormat::Json => render_json(records).context("failed to serialize records"),
        OutputFormat::Table => Ok(render_table(records)),
    }
}

/// Render a plain list of strings (one per line, or a JSON array).
pub fn render_list(values: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(values).context("failed to serialize list")
        }
        OutputFormat::Table => Ok(values.join("\n")),
    }
}
