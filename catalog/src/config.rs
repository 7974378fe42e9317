//! Catalog connection configuration

use std::time::Duration;

use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Public TheMealDB endpoint used when nothing else is configured
pub const DEFAULT_CATALOG_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const CATALOG_URL_VAR: &str = "SPICETRAIL_CATALOG_URL";
pub const TIMEOUT_MS_VAR: &str = "SPICETRAIL_TIMEOUT_MS";

/// Where the catalog lives and how long to wait for it
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL; endpoint file names are appended to it
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_CATALOG_URL).expect("default catalog url is valid"),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl CatalogConfig {
    /// Build a config from an explicit base URL and timeout
    pub fn new(base_url: &str, timeout_ms: u64) -> CatalogResult<Self> {
        if timeout_ms == 0 {
            return Err(CatalogError::Configuration {
                field: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            base_url: parse_base_url(base_url)?,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Optional:
    /// - `SPICETRAIL_CATALOG_URL`: catalog base URL
    /// - `SPICETRAIL_TIMEOUT_MS`: per-request timeout in milliseconds
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_env_with_overrides(None, None)
    }

    /// Like `from_env`, but explicit values win and their variables are never read
    pub fn from_env_with_overrides(base_url: Option<&str>, timeout_ms: Option<u64>) -> CatalogResult<Self> {
        dotenv::dotenv().ok();
        Self::from_sources(base_url, timeout_ms, |name| std::env::var(name).ok())
    }

    /// Resolve each field from its override, then `lookup`, then the default
    pub fn from_sources<F>(base_url: Option<&str>, timeout_ms: Option<u64>, lookup: F) -> CatalogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match base_url {
            Some(url) => url.to_string(),
            None => lookup(CATALOG_URL_VAR).unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
        };

        let timeout_ms = match timeout_ms {
            Some(ms) => ms,
            None => match lookup(TIMEOUT_MS_VAR) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|_| CatalogError::Configuration {
                    field: format!("{TIMEOUT_MS_VAR} must be a whole number of milliseconds, got {raw:?}"),
                })?,
                None => DEFAULT_TIMEOUT_MS,
            },
        };

        Self::new(&base_url, timeout_ms)
    }

    /// Full URL of a catalog endpoint such as `search.php`
    pub fn endpoint(&self, name: &str) -> CatalogResult<Url> {
        self.base_url.join(name).map_err(|e| CatalogError::Configuration {
            field: format!("invalid endpoint {name}: {e}"),
        })
    }
}

/// Parse a base URL, forcing a trailing slash so `join` appends instead of replacing
fn parse_base_url(raw: &str) -> CatalogResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| CatalogError::Configuration {
        field: format!("catalog url {raw:?} is invalid: {e}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::Configuration {
            field: format!("catalog url scheme must be http or https, got {other}"),
        }),
    }
}
