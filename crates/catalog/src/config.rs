//! Catalog build configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use ows_urls::{ImageSize, SynthesizerOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Root of the published geodata inventory.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/mauforonda/geodatos/master";

/// Catalog build configuration, optionally loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Source root both resources are resolved against
    pub base_url: String,
    /// Provider directory, relative to `base_url`
    pub directory_path: String,
    /// Layer table, relative to `base_url`
    pub catalog_path: String,
    /// Anchored `/ows` strip for reflect-style endpoints
    pub strict_suffix_strip: bool,
    /// Side of exported map images, in pixels
    pub map_size: u32,
    /// Side of thumbnails, in pixels
    pub thumbnail_size: u32,
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            directory_path: "directorio.json".to_string(),
            catalog_path: "capas.csv".to_string(),
            strict_suffix_strip: false,
            map_size: 500,
            thumbnail_size: 80,
            request_timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CatalogConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), base_url = %config.base_url, "Loaded catalog config");
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!("base_url must be an http(s) URL, got '{}'", self.base_url);
        }
        if self.directory_path.trim().is_empty() {
            anyhow::bail!("directory_path must not be empty");
        }
        if self.catalog_path.trim().is_empty() {
            anyhow::bail!("catalog_path must not be empty");
        }
        if self.map_size == 0 || self.thumbnail_size == 0 {
            anyhow::bail!("map_size and thumbnail_size must be > 0");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be > 0");
        }
        Ok(())
    }

    pub fn directory_url(&self) -> String {
        resource_url(&self.base_url, &self.directory_path)
    }

    pub fn catalog_url(&self) -> String {
        resource_url(&self.base_url, &self.catalog_path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn synthesizer_options(&self) -> SynthesizerOptions {
        SynthesizerOptions {
            strict_suffix_strip: self.strict_suffix_strip,
            map_size: ImageSize::square(self.map_size),
            thumbnail_size: ImageSize::square(self.thumbnail_size),
        }
    }
}

/// Join a base URL and a relative path with exactly one slash.
pub fn resource_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_urls() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.directory_url(),
            "https://raw.githubusercontent.com/mauforonda/geodatos/master/directorio.json"
        );
        assert_eq!(
            config.catalog_url(),
            "https://raw.githubusercontent.com/mauforonda/geodatos/master/capas.csv"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resource_url_slashes() {
        assert_eq!(resource_url("https://a/b/", "/c.csv"), "https://a/b/c.csv");
        assert_eq!(resource_url("https://a/b", "c.csv"), "https://a/b/c.csv");
    }

    #[test]
    fn test_parse_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url: https://mirror.example.org/geodatos\nstrict_suffix_strip: true\nthumbnail_size: 50"
        )
        .unwrap();

        let config = CatalogConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://mirror.example.org/geodatos");
        assert!(config.strict_suffix_strip);
        assert_eq!(config.thumbnail_size, 50);
        assert_eq!(config.map_size, 500);
        assert_eq!(config.catalog_path, "capas.csv");

        let options = config.synthesizer_options();
        assert!(options.strict_suffix_strip);
        assert_eq!(options.thumbnail_size, ImageSize::square(50));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = CatalogConfig::from_file("/nonexistent/geocatalog.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/geocatalog.yaml"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = CatalogConfig {
            base_url: "ftp://example.org".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CatalogConfig {
            thumbnail_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CatalogConfig {
            catalog_path: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
