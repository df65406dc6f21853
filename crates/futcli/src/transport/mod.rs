//! HTTP transport seam.
//!
//! Both fetchers talk to the network only through [`Transport`], so a failed
//! request is always an absent value plus a log line, never an error the
//! caller has to handle.

pub mod http_client;

pub use http_client::HttpClient;

use async_trait::async_trait;
use serde_json::Value;

/// GET-only access to remote documents.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the body on a 2xx response.
    ///
    /// Returns `None` after logging on any transport or status failure.
    async fn fetch_text(&self, url: &str) -> Option<String>;

    /// Fetch `url` and parse the body as JSON.
    ///
    /// Returns `None` after logging on any transport, status, or parse failure.
    async fn fetch_json(&self, url: &str) -> Option<Value> {
        let body = self.fetch_text(url).await?;
        match serde_json::from_str(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(url, error = %e, "Error fetching {url}: invalid JSON");
                None
            }
        }
    }
}
