//! Evolutions scraper.
//!
//! Fetches the evolutions page once and turns every embedded evolution
//! payload into an [`EvolutionItem`], in document order.

pub mod extract;

pub use extract::EvolutionPatterns;

use crate::config::FutConfig;
use crate::record::EvolutionItem;
use crate::transport::Transport;

/// Scrapes evolution records from a single HTML page.
pub struct EvolutionsScraper<T> {
    transport: T,
    url: String,
    patterns: EvolutionPatterns,
}

impl<T: Transport> EvolutionsScraper<T> {
    pub fn new(transport: T, url: impl Into<String>, game_version: &str) -> Self {
        Self {
            transport,
            url: url.into(),
            patterns: EvolutionPatterns::new(game_version),
        }
    }

    pub fn from_config(transport: T, config: &FutConfig) -> Self {
        Self::new(transport, config.evolutions_url.clone(), &config.game_version)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the page and extract every evolution on it.
    ///
    /// A failed fetch yields an empty list; the transport has already logged
    /// the failure.
    pub async fn fetch_items(&self) -> Vec<EvolutionItem> {
        let Some(html) = self.transport.fetch_text(&self.url).await else {
            return Vec::new();
        };
        let items = self.parse(&html);
        tracing::debug!(url = %self.url, count = items.len(), "parsed evolutions");
        items
    }

    /// Extract every evolution from an already fetched document.
    pub fn parse(&self, html: &str) -> Vec<EvolutionItem> {
        self.patterns
            .segment(html)
            .into_iter()
            .map(|block| self.patterns.extract(block))
            .collect()
    }
}
