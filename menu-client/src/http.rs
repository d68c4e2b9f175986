//! HTTP client for the catalog endpoint

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::Dish;

/// HTTP client for making requests to the catalog server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    dishes_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            dishes_url: config.dishes_url(),
        })
    }

    /// Make a GET request
    async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(format!("{}: {}", status, text))),
            };
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Catalog API ==========

    /// Fetch the dish list
    pub async fn fetch_dishes(&self) -> ClientResult<Vec<Dish>> {
        let dishes: Vec<Dish> = self.get_url(&self.dishes_url).await?;
        tracing::info!(count = dishes.len(), url = %self.dishes_url, "Dish catalog fetched");
        Ok(dishes)
    }
}
