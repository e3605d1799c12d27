//! Loading and validating the layer table.

use std::sync::Arc;

use catalog_common::{BoundingBox, CatalogError, CatalogResult, LayerRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::config::{resource_url, CatalogConfig};
use crate::fetcher::ResourceFetcher;

/// Columns that must be present in the header for the table to be usable at all.
const REQUIRED_COLUMNS: [&str; 7] = [
    "nombre", "titulo", "geoserver", "min_x", "min_y", "max_x", "max_y",
];

/// Fetches the layer table, filters it and orders it newest-first.
pub struct CatalogLoader {
    fetcher: Arc<dyn ResourceFetcher>,
    url: String,
}

impl CatalogLoader {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, base_url: &str, path: &str) -> Self {
        Self {
            fetcher,
            url: resource_url(base_url, path),
        }
    }

    pub fn from_config(fetcher: Arc<dyn ResourceFetcher>, config: &CatalogConfig) -> Self {
        Self::new(fetcher, &config.base_url, &config.catalog_path)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the table and return its records, last source row first.
    ///
    /// With `active_only`, rows with a removal date are dropped before
    /// validation, so a malformed retired row cannot fail the build.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn load(&self, active_only: bool) -> CatalogResult<Vec<LayerRecord>> {
        let body = self.fetcher.fetch_text(&self.url).await?;
        let layers = parse_catalog(&body, &self.url, active_only)?;
        info!(layers = layers.len(), active_only, "Loaded layer catalog");
        Ok(layers)
    }
}

/// Parse a layer table body. `url` is only used in error messages.
pub fn parse_catalog(body: &str, url: &str, active_only: bool) -> CatalogResult<Vec<LayerRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::fetch(url, e))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::fetch(
                url,
                format!("missing column '{}' in layer table", column),
            ));
        }
    }

    let mut layers = Vec::new();
    let mut retired = 0usize;
    for (index, row) in reader.deserialize::<CatalogRow>().enumerate() {
        let row = row.map_err(|e| CatalogError::fetch(url, e))?;
        if active_only && row.is_retired() {
            retired += 1;
            continue;
        }
        layers.push(row.into_record(index + 1)?);
    }

    if retired > 0 {
        debug!(retired, "Skipped retired layers");
    }

    layers.reverse();
    Ok(layers)
}

/// One raw row of the layer table. Blank cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    nombre: Option<String>,
    titulo: Option<String>,
    descripcion: Option<String>,
    geoserver: Option<String>,
    fecha_encontrado: Option<String>,
    fecha_removido: Option<String>,
    min_x: Option<String>,
    min_y: Option<String>,
    max_x: Option<String>,
    max_y: Option<String>,
    epsg: Option<String>,
    wms: Option<String>,
    wfs: Option<String>,
}

impl CatalogRow {
    fn is_retired(&self) -> bool {
        self.fecha_removido.is_some()
    }

    /// Check the row against the layer schema. `row` is the 1-based data row.
    fn into_record(self, row: usize) -> CatalogResult<LayerRecord> {
        let (min_x, min_x_text) = coordinate(self.min_x, row, "min_x")?;
        let (min_y, min_y_text) = coordinate(self.min_y, row, "min_y")?;
        let (max_x, max_x_text) = coordinate(self.max_x, row, "max_x")?;
        let (max_y, max_y_text) = coordinate(self.max_y, row, "max_y")?;
        let extent = BoundingBox::new(min_x, min_y, max_x, max_y)
            .with_source_text([min_x_text, min_y_text, max_x_text, max_y_text]);

        Ok(LayerRecord {
            name: required(self.nombre, row, "nombre")?,
            title: required(self.titulo, row, "titulo")?,
            description: self.descripcion,
            geoserver_name: required(self.geoserver, row, "geoserver")?,
            found_date: date(self.fecha_encontrado, row, "fecha_encontrado")?,
            removed_date: date(self.fecha_removido, row, "fecha_removido")?,
            extent,
            epsg: epsg(self.epsg, row)?,
            wms: flag(self.wms, row, "wms")?,
            wfs: flag(self.wfs, row, "wfs")?,
        })
    }
}

fn required(value: Option<String>, row: usize, field: &str) -> CatalogResult<String> {
    value.ok_or_else(|| CatalogError::validation(row, field, "missing value"))
}

/// A finite number, returned together with the cell text it was read from.
fn coordinate(value: Option<String>, row: usize, field: &str) -> CatalogResult<(f64, String)> {
    let raw = required(value, row, field)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok((v, raw)),
        _ => Err(CatalogError::validation(
            row,
            field,
            format!("'{}' is not a finite number", raw),
        )),
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or RFC 3339; keeps the date part.
fn date(value: Option<String>, row: usize, field: &str) -> CatalogResult<Option<NaiveDate>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.date_naive()))
        .map(Some)
        .map_err(|_| CatalogError::validation(row, field, format!("'{}' is not a date", raw)))
}

fn flag(value: Option<String>, row: usize, field: &str) -> CatalogResult<Option<bool>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(CatalogError::validation(
            row,
            field,
            format!("'{}' is not a boolean", raw),
        )),
    }
}

/// EPSG codes may come out of the indexer as floats ("4326.0").
fn epsg(value: Option<String>, row: usize) -> CatalogResult<Option<u32>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    if let Ok(code) = raw.parse::<u32>() {
        return Ok(Some(code));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v > 0.0 && v <= u32::MAX as f64 => Ok(Some(v as u32)),
        _ => Err(CatalogError::validation(
            row,
            "epsg",
            format!("'{}' is not an EPSG code", raw),
        )),
    }
}
