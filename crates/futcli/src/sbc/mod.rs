//! SBC catalog fetcher.
//!
//! Walks the paginated SBC API once, keeps the aggregated records in an owned
//! [`SbcCache`], and derives categories and formatted items from that cache
//! without touching the network again.
//!
//! A failed page fetch ends the sweep with whatever was collected so far. When
//! the very first page fails the result is simply empty: callers cannot tell
//! a failed sweep from an empty catalog, only the log can.

pub mod cache;
pub mod types;

pub use cache::SbcCache;
pub use types::{SbcCategory, SbcGroups, SbcRecord};

use crate::config::FutConfig;
use crate::record::SbcItem;
use crate::transport::Transport;
use serde_json::Value;
use std::collections::BTreeSet;
use url::Url;

/// Paginating client for the SBC API.
pub struct SbcFetcher<T> {
    transport: T,
    api_url: String,
    cache: SbcCache,
}

impl<T: Transport> SbcFetcher<T> {
    pub fn new(transport: T, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
            cache: SbcCache::new(),
        }
    }

    pub fn from_config(transport: T, config: &FutConfig) -> Self {
        Self::new(transport, config.sbc_api_url.clone())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cache(&self) -> &SbcCache {
        &self.cache
    }

    /// Forget the cached sweep; the next call paginates again.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// All records across all pages, fetched on first use and cached after.
    pub async fn fetch_all(&mut self) -> &[SbcRecord] {
        if !self.cache.is_populated() {
            let records = self.sweep().await;
            return self.cache.put(records);
        }
        self.cache.get().unwrap_or(&[])
    }

    /// Distinct category slugs, sorted.
    pub async fn list_categories(&mut self) -> Vec<String> {
        self.fetch_all()
            .await
            .iter()
            .map(|r| r.slug().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Formatted items grouped by category in discovery order.
    pub async fn grouped_items(&mut self) -> SbcGroups {
        SbcGroups::from_records(self.fetch_all().await)
    }

    /// Formatted items of one category, or `None` for an unknown slug.
    pub async fn items_in(&mut self, category: &str) -> Option<Vec<SbcItem>> {
        self.grouped_items()
            .await
            .get(category)
            .map(<[SbcItem]>::to_vec)
    }

    async fn sweep(&self) -> Vec<SbcRecord> {
        let mut records = Vec::new();
        let mut page = "1".to_string();
        let mut pages = 0usize;

        loop {
            let url = page_url(&self.api_url, &page);
            let Some(mut body) = self.transport.fetch_json(&url).await else {
                break;
            };
            pages += 1;

            if let Some(Value::Array(entries)) = body.get_mut("data").map(Value::take) {
                for entry in entries {
                    match serde_json::from_value::<SbcRecord>(entry) {
                        Ok(record) => records.push(record),
                        Err(e) => tracing::warn!(url = %url, error = %e, "skipping malformed SBC record"),
                    }
                }
            }

            match next_page(body.get("next")) {
                Some(next) => page = next,
                None => break,
            }
        }

        tracing::debug!(pages, records = records.len(), "SBC sweep finished");
        records
    }
}

/// `api_url` with its `page` query parameter set.
pub fn page_url(api_url: &str, page: &str) -> String {
    match Url::parse(api_url) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("page", page);
            url.to_string()
        }
        Err(_) => format!("{api_url}?page={page}"),
    }
}

/// The `next` token as a page parameter; `None` ends pagination.
fn next_page(next: Option<&Value>) -> Option<String> {
    match next? {
        Value::Null => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        other => {
            tracing::warn!(next = %other, "unrecognised SBC next token, stopping");
            None
        }
    }
}
