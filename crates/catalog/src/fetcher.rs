//! Fetching remote resources as text.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use catalog_common::{CatalogError, CatalogResult};
use reqwest::Client;
use tracing::{debug, instrument};

/// Source of raw resource bodies. Retries, if any, belong to implementations.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the body of `url` as text.
    async fn fetch_text(&self, url: &str) -> CatalogResult<String>;
}

/// HTTP fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("geocatalog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch_text(&self, url: &str) -> CatalogResult<String> {
        debug!("Fetching resource");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::fetch(url, format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::fetch(url, e))?;

        debug!(bytes = body.len(), "Fetched resource");
        Ok(body)
    }
}

/// In-memory fetcher serving fixed bodies by URL.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    resources: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.resources.insert(url.into(), body.into());
        self
    }
}

#[async_trait]
impl ResourceFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> CatalogResult<String> {
        self.resources
            .get(url)
            .cloned()
            .ok_or_else(|| CatalogError::fetch(url, "resource not found"))
    }
}
