//! Catalog assembly for the geodata layer inventory.
//!
//! A build fetches two independent resources, the provider directory (JSON)
//! and the layer table (CSV), joins every layer to its provider, and attaches
//! the synthesized WMS/WFS URLs.
//!
//! ```ignore
//! let config = CatalogConfig::default();
//! let fetcher = Arc::new(HttpFetcher::new(config.request_timeout())?);
//! let view = CatalogService::new(fetcher, &config).build(true).await?;
//! ```

pub mod assembler;
pub mod config;
pub mod directory;
pub mod fetcher;
pub mod layers;
pub mod service;

pub use assembler::{CatalogAssembler, CatalogEntry, CatalogView};
pub use config::CatalogConfig;
pub use directory::DirectoryLoader;
pub use fetcher::{HttpFetcher, ResourceFetcher, StaticFetcher};
pub use layers::CatalogLoader;
pub use service::CatalogService;
