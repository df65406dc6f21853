//! Transport failure types.
//!
//! These never cross the [`Transport`](crate::transport::Transport) boundary:
//! the HTTP client logs them and hands callers `None` instead.

/// Errors that can occur while fetching a URL.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_names_url() {
        let err = FetchError::Status {
            url: "https://www.fut.gg/evolutions/".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "HTTP 503 for https://www.fut.gg/evolutions/");
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FetchError = parse.into();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
