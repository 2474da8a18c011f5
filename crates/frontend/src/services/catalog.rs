//! Product catalog over HTTP

use async_trait::async_trait;
use showcase_core::CatalogError;
use showcase_core::catalog::{CatalogPage, CatalogSource, products_url};
use tracing::debug;

/// Fetches product pages from a dummyjson-compatible endpoint
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_page(&self, limit: u32) -> Result<CatalogPage, CatalogError> {
        let url = products_url(&self.base_url, limit);
        debug!(%url, "requesting catalog page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| CatalogError::transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::transport(e.to_string()))?;

        CatalogPage::from_json(&body)
    }
}
