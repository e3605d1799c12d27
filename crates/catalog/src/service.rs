//! One catalog build: both loads in parallel, then the join.

use std::sync::Arc;
use std::time::Instant;

use catalog_common::CatalogResult;
use ows_urls::ServiceUrlSynthesizer;
use tracing::{info, instrument};

use crate::assembler::{CatalogAssembler, CatalogView};
use crate::config::CatalogConfig;
use crate::directory::DirectoryLoader;
use crate::fetcher::ResourceFetcher;
use crate::layers::CatalogLoader;

/// Builds catalog views. Holds no state between builds.
pub struct CatalogService {
    directory: DirectoryLoader,
    layers: CatalogLoader,
    assembler: CatalogAssembler,
}

impl CatalogService {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, config: &CatalogConfig) -> Self {
        Self {
            directory: DirectoryLoader::from_config(fetcher.clone(), config),
            layers: CatalogLoader::from_config(fetcher, config),
            assembler: CatalogAssembler::new(ServiceUrlSynthesizer::new(
                config.synthesizer_options(),
            )),
        }
    }

    /// Build a fresh catalog view.
    ///
    /// The directory and the layer table are fetched concurrently; the first
    /// error from either aborts the build and drops the other fetch.
    #[instrument(skip(self))]
    pub async fn build(&self, active_only: bool) -> CatalogResult<CatalogView> {
        let start = Instant::now();

        let (directory, layers) =
            tokio::try_join!(self.directory.load(), self.layers.load(active_only))?;
        let view = self.assembler.assemble(&directory, layers)?;

        info!(
            entries = view.len(),
            providers = directory.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Catalog built"
        );
        Ok(view)
    }
}
