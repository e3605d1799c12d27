//! Loading the provider directory.

use std::sync::Arc;

use catalog_common::{CatalogError, CatalogResult, DirectoryEntry, DirectoryIndex};
use tracing::{info, instrument, warn};

use crate::config::{resource_url, CatalogConfig};
use crate::fetcher::ResourceFetcher;

/// Fetches the directory resource and indexes it by provider name.
pub struct DirectoryLoader {
    fetcher: Arc<dyn ResourceFetcher>,
    url: String,
}

impl DirectoryLoader {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, base_url: &str, path: &str) -> Self {
        Self {
            fetcher,
            url: resource_url(base_url, path),
        }
    }

    pub fn from_config(fetcher: Arc<dyn ResourceFetcher>, config: &CatalogConfig) -> Self {
        Self::new(fetcher, &config.base_url, &config.directory_path)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and index the directory.
    ///
    /// Fails with `FetchError` when the resource is unreachable or is not a
    /// JSON array of records each carrying a name and an endpoint.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn load(&self) -> CatalogResult<DirectoryIndex> {
        let body = self.fetcher.fetch_text(&self.url).await?;
        let entries: Vec<DirectoryEntry> = serde_json::from_str(&body)
            .map_err(|e| CatalogError::fetch(&self.url, format!("malformed directory: {}", e)))?;

        let index = index_entries(entries);
        info!(providers = index.len(), "Loaded provider directory");
        Ok(index)
    }
}

/// Build the name index. A repeated name replaces the earlier entry.
pub fn index_entries(entries: Vec<DirectoryEntry>) -> DirectoryIndex {
    let mut index = DirectoryIndex::with_capacity(entries.len());
    for entry in entries {
        if let Some(previous) = index.insert(entry.name.clone(), entry) {
            warn!(provider = %previous.name, "Duplicate provider in directory, keeping the last one");
        }
    }
    index
}
