use menu_client::ClientConfig;
use menu_client::config::{DEFAULT_BASE_URL, DEFAULT_DISHES_PATH};
use shared::error::{AppError, AppResult};
use std::time::Duration;

/// Desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_URL | http://localhost:4000 | Catalog server base URL |
/// | CATALOG_PATH | dishes | Dish list path |
/// | REQUEST_TIMEOUT_MS | 30000 | Catalog fetch timeout (ms) |
/// | LOG_LEVEL | info | Default log filter (`RUST_LOG` wins) |
/// | LOG_JSON | false | JSON log output |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_url: String,
    pub catalog_path: String,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    /// Load from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source
    ///
    /// Unparseable numeric or boolean values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_url: lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            catalog_path: lookup("CATALOG_PATH").unwrap_or_else(|| DEFAULT_DISHES_PATH.into()),
            request_timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.catalog_url.starts_with("http://") || self.catalog_url.starts_with("https://")) {
            return Err(AppError::config(format!(
                "CATALOG_URL must be an http(s) URL, got {}",
                self.catalog_url
            ))
            .with_detail("variable", "CATALOG_URL"));
        }
        if self.request_timeout_ms == 0 {
            return Err(AppError::config("REQUEST_TIMEOUT_MS must be positive")
                .with_detail("variable", "REQUEST_TIMEOUT_MS"));
        }
        Ok(())
    }

    /// Catalog client settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.catalog_url.clone())
            .with_dishes_path(self.catalog_path.clone())
            .with_timeout(Duration::from_millis(self.request_timeout_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
