//! `futcli evolutions` — scrape and print every evolution.

use crate::cli::output::{self, OutputFormat};
use crate::evolutions::EvolutionsScraper;
use crate::transport::Transport;
use anyhow::Result;

/// Run the evolutions command and return the rendered output.
pub async fn run<T: Transport>(
    scraper: &EvolutionsScraper<T>,
    format: OutputFormat,
) -> Result<String> {
    let items = scraper.fetch_items().await;
    output::render(&items, format)
}
