//! Common types shared across the geodata catalog crates.

pub mod bbox;
pub mod directory;
pub mod error;
pub mod layer;
pub mod presentation;

pub use bbox::BoundingBox;
pub use directory::{DirectoryEntry, DirectoryIndex, EndpointShape};
pub use error::{CatalogError, CatalogResult};
pub use layer::LayerRecord;
pub use presentation::{ExportKind, ExportLink, OwsService, PresentationData};
