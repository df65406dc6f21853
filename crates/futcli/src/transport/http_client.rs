//! Async HTTP client wrapping reqwest.
//!
//! One GET per call: no retry, no backoff. Failures are logged with the URL
//! and surface to callers as `None`.

use super::Transport;
use crate::config::FutConfig;
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HTTP client used by both fetchers.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with the given request timeout and user agent.
    pub fn new(timeout_ms: u64, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Create a client from resolved configuration.
    pub fn from_config(config: &FutConfig) -> Self {
        Self::new(config.timeout_ms, &config.user_agent)
    }

    /// Perform a single GET and return the body of a 2xx response.
    pub async fn get(&self, url: &str) -> FetchResult<String> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }

    /// Perform a single GET and decode the body as JSON.
    pub async fn get_json(&self, url: &str) -> FetchResult<Value> {
        let body = self.get(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn fetch_text(&self, url: &str) -> Option<String> {
        match self.get(url).await {
            Ok(body) => {
                tracing::debug!(url, bytes = body.len(), "fetched");
                Some(body)
            }
            Err(e) => {
                tracing::error!(url, error = %e, "Error fetching {url}");
                None
            }
        }
    }

    async fn fetch_json(&self, url: &str) -> Option<Value> {
        match self.get_json(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(url, error = %e, "Error fetching {url}");
                None
            }
        }
    }
}
