//! Configuration loading and resolution.
//!
//! Each field resolves from an explicit override, then its environment
//! variable, then the built-in default.

use anyhow::{Context, Result};
use url::Url;

/// Evolutions listing page.
pub const DEFAULT_EVOLUTIONS_URL: &str = "https://www.fut.gg/evolutions/";
/// Paginated SBC catalog endpoint.
pub const DEFAULT_SBC_API_URL: &str = "https://www.fut.gg/api/fut/sbc/";
/// Game tag embedded in the evolutions payload.
pub const DEFAULT_GAME_VERSION: &str = "26";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_EVOLUTIONS_URL: &str = "FUTCLI_EVOLUTIONS_URL";
pub const ENV_SBC_API_URL: &str = "FUTCLI_SBC_URL";
pub const ENV_GAME_VERSION: &str = "FUTCLI_GAME";
pub const ENV_TIMEOUT_MS: &str = "FUTCLI_TIMEOUT_MS";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FutConfig {
    /// Page scraped for evolutions.
    pub evolutions_url: String,
    /// Base URL of the paginated SBC API.
    pub sbc_api_url: String,
    /// Game tag embedded in the evolution block and level markers.
    pub game_version: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for FutConfig {
    fn default() -> Self {
        Self {
            evolutions_url: DEFAULT_EVOLUTIONS_URL.to_string(),
            sbc_api_url: DEFAULT_SBC_API_URL.to_string(),
            game_version: DEFAULT_GAME_VERSION.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("futcli/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub evolutions_url: Option<String>,
    pub sbc_api_url: Option<String>,
    pub game_version: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl FutConfig {
    /// Resolve against the process environment.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn resolve_with<F>(overrides: &ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let evolutions_url = pick(
            overrides.evolutions_url.clone(),
            lookup(ENV_EVOLUTIONS_URL),
            defaults.evolutions_url,
        );
        let sbc_api_url = pick(
            overrides.sbc_api_url.clone(),
            lookup(ENV_SBC_API_URL),
            defaults.sbc_api_url,
        );
        let game_version = pick(
            overrides.game_version.clone(),
            lookup(ENV_GAME_VERSION),
            defaults.game_version,
        );

        let timeout_ms = match overrides.timeout_ms {
            Some(ms) => ms,
            None => match lookup(ENV_TIMEOUT_MS).filter(|s| !s.trim().is_empty()) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{ENV_TIMEOUT_MS} is not a number: {raw:?}"))?,
                None => defaults.timeout_ms,
            },
        };

        Url::parse(&evolutions_url)
            .with_context(|| format!("invalid evolutions URL: {evolutions_url}"))?;
        Url::parse(&sbc_api_url).with_context(|| format!("invalid SBC URL: {sbc_api_url}"))?;

        Ok(Self {
            evolutions_url,
            sbc_api_url,
            game_version,
            timeout_ms,
            user_agent: defaults.user_agent,
        })
    }
}

fn pick(explicit: Option<String>, env: Option<String>, default: String) -> String {
    explicit
        .or(env.filter(|v| !v.trim().is_empty()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let cfg = FutConfig::resolve_with(&ConfigOverrides::default(), env(&[])).unwrap();
        assert_eq!(cfg.evolutions_url, DEFAULT_EVOLUTIONS_URL);
        assert_eq!(cfg.sbc_api_url, DEFAULT_SBC_API_URL);
        assert_eq!(cfg.game_version, "26");
        assert_eq!(cfg.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_env_beats_default() {
        let cfg = FutConfig::resolve_with(
            &ConfigOverrides::default(),
            env(&[(ENV_GAME_VERSION, "27"), (ENV_TIMEOUT_MS, "500")]),
        )
        .unwrap();
        assert_eq!(cfg.game_version, "27");
        assert_eq!(cfg.timeout_ms, 500);
    }

    #[test]
    fn test_override_beats_env() {
        let overrides = ConfigOverrides {
            sbc_api_url: Some("http://127.0.0.1:9/sbc/".to_string()),
            timeout_ms: Some(42),
            ..Default::default()
        };
        let cfg = FutConfig::resolve_with(
            &overrides,
            env(&[(ENV_SBC_API_URL, "http://elsewhere/"), (ENV_TIMEOUT_MS, "500")]),
        )
        .unwrap();
        assert_eq!(cfg.sbc_api_url, "http://127.0.0.1:9/sbc/");
        assert_eq!(cfg.timeout_ms, 42);
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let cfg = FutConfig::resolve_with(
            &ConfigOverrides::default(),
            env(&[(ENV_EVOLUTIONS_URL, "  "), (ENV_TIMEOUT_MS, "")]),
        )
        .unwrap();
        assert_eq!(cfg.evolutions_url, DEFAULT_EVOLUTIONS_URL);
        assert_eq!(cfg.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_bad_timeout_is_error() {
        let err = FutConfig::resolve_with(
            &ConfigOverrides::default(),
            env(&[(ENV_TIMEOUT_MS, "soon")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_MS));
    }

    #[test]
    fn test_bad_url_is_error() {
        let overrides = ConfigOverrides {
            evolutions_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(FutConfig::resolve_with(&overrides, env(&[])).is_err());
    }
}
