//! Client configuration

use std::time::Duration;

/// Default catalog server
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
/// Default dish list path, relative to the base URL
pub const DEFAULT_DISHES_PATH: &str = "dishes";

/// Client configuration for connecting to the catalog server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Dish list path (e.g., "dishes")
    pub dishes_path: String,

    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            dishes_path: DEFAULT_DISHES_PATH.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the dish list path
    pub fn with_dishes_path(mut self, path: impl Into<String>) -> Self {
        self.dishes_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the dish list
    pub fn dishes_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.dishes_path.trim_start_matches('/')
        )
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
