//! Error types for catalog builds.

use std::fmt::Display;

use thiserror::Error;

/// Result type alias using CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Every variant aborts the whole catalog build; there is no partial catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A remote resource was unreachable or did not have the expected shape.
    #[error("Failed to fetch {url}: {message}")]
    FetchError { url: String, message: String },

    /// A retained layer row failed its required-field checks.
    #[error("Invalid layer record at row {row}, field '{field}': {message}")]
    ValidationError {
        row: usize,
        field: String,
        message: String,
    },

    /// A layer points at a provider missing from the directory.
    #[error("Layer '{layer}' references unknown provider '{geoserver}'")]
    ReferenceError { layer: String, geoserver: String },
}

impl CatalogError {
    pub fn fetch(url: impl Into<String>, err: impl Display) -> Self {
        CatalogError::FetchError {
            url: url.into(),
            message: err.to_string(),
        }
    }

    pub fn validation(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::ValidationError {
            row,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::FetchError { .. } => "FetchError",
            CatalogError::ValidationError { .. } => "ValidationError",
            CatalogError::ReferenceError { .. } => "ReferenceError",
        }
    }
}
