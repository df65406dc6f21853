//! `futcli sbc [category]` and `futcli sbc-types`.

use crate::cli::output::{self, OutputFormat};
use crate::sbc::SbcFetcher;
use crate::transport::Transport;
use anyhow::{bail, Result};

/// Print SBC items, either every category or only `category`.
pub async fn run<T: Transport>(
    fetcher: &mut SbcFetcher<T>,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let items = match category {
        None => fetcher.grouped_items().await.into_flat(),
        Some(slug) => match fetcher.items_in(slug).await {
            Some(items) => items,
            None => {
                // Served from the cache filled by `items_in`.
                let groups = fetcher.grouped_items().await;
                let available: Vec<&str> = groups.categories().collect();
                if available.is_empty() {
                    bail!("Invalid SBC option: '{slug}' (no SBC categories available)");
                }
                bail!(
                    "Invalid SBC option: '{slug}'. Available: {}",
                    available.join(", ")
                );
            }
        },
    };

    output::render(&items, format)
}

/// Print the sorted category slugs.
pub async fn run_types<T: Transport>(
    fetcher: &mut SbcFetcher<T>,
    format: OutputFormat,
) -> Result<String> {
    let categories = fetcher.list_categories().await;
    output::render_list(&categories, format)
}
