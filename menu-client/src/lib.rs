//! Menu Client - HTTP client for the dish catalog
//!
//! Fetches the dish list the desk renders and orders from.

pub mod config;
pub mod error;
pub mod http;
pub mod provider;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use provider::CatalogProvider;

// Re-export shared types for convenience
pub use shared::models::{Catalog, Dish};
