//! Catalog provider seam

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::{Catalog, Dish};

/// Source of the dish list
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_dishes(&self) -> ClientResult<Vec<Dish>>;

    async fn fetch_catalog(&self) -> ClientResult<Catalog> {
        self.fetch_dishes().await.map(Catalog::new)
    }
}

#[async_trait]
impl CatalogProvider for HttpClient {
    async fn fetch_dishes(&self) -> ClientResult<Vec<Dish>> {
        HttpClient::fetch_dishes(self).await
    }
}
