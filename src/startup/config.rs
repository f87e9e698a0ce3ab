//! Runtime configuration for the catalog client.
//!
//! Values are layered: built-in defaults, then environment, then the
//! `--api-url` flag.

use std::time::Duration;
use tracing::warn;

use crate::api::DEFAULT_API_URL;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "CATALOG_API_URL";
/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "CATALOG_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the catalog client.
///
/// # Example
///
/// ```
/// use catalog::startup::CatalogConfig;
/// use std::time::Duration;
///
/// let config = CatalogConfig::default()
///     .with_api_url("http://api.internal:9000/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.api_url, "http://api.internal:9000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without trailing slash
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. Trailing slashes are dropped.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply the `--api-url` flag, if given.
    pub fn with_cli_override(self, api_url: Option<String>) -> Self {
        match api_url {
            Some(url) => self.with_api_url(url),
            None => self,
        }
    }

    /// Defaults overridden by `CATALOG_API_URL` and `CATALOG_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values are ignored;
    /// an unparsable timeout is logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_url(url.trim());
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        config
    }
}
