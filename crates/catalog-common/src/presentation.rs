//! Derived presentation data attached to each catalog entry.

use serde::{Deserialize, Serialize};

/// OGC service a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwsService {
    Wms,
    Wfs,
}

/// The fixed set of export/view links produced for every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    MapView,
    SampleFeature,
    GeoJson,
    Shapefile,
    Csv,
    GeoTiff,
    Kml,
    Jpeg,
    Pdf,
}

impl ExportKind {
    /// All kinds, in display order.
    pub const ALL: [ExportKind; 9] = [
        ExportKind::MapView,
        ExportKind::SampleFeature,
        ExportKind::GeoJson,
        ExportKind::Shapefile,
        ExportKind::Csv,
        ExportKind::GeoTiff,
        ExportKind::Kml,
        ExportKind::Jpeg,
        ExportKind::Pdf,
    ];

    /// Link text shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::MapView => "View map",
            ExportKind::SampleFeature => "Sample feature",
            ExportKind::GeoJson => "GeoJSON",
            ExportKind::Shapefile => "ShapeFile",
            ExportKind::Csv => "CSV",
            ExportKind::GeoTiff => "GeoTIFF",
            ExportKind::Kml => "KML",
            ExportKind::Jpeg => "JPEG",
            ExportKind::Pdf => "PDF",
        }
    }

    /// Value of the `format` (WMS) or `outputFormat` (WFS) parameter.
    ///
    /// The sample-feature format carries its own `count=1` parameter.
    pub fn format(&self) -> &'static str {
        match self {
            ExportKind::MapView => "application/openlayers",
            ExportKind::SampleFeature => "application/json&count=1",
            ExportKind::GeoJson => "application/json",
            ExportKind::Shapefile => "SHAPE-ZIP",
            ExportKind::Csv => "csv",
            ExportKind::GeoTiff => "image/geotiff",
            ExportKind::Kml => "application/vnd.google-earth.kml",
            ExportKind::Jpeg => "image/jpeg",
            ExportKind::Pdf => "application/pdf",
        }
    }

    /// Raster outputs go through WMS GetMap, vector outputs through WFS GetFeature.
    pub fn service(&self) -> OwsService {
        match self {
            ExportKind::SampleFeature
            | ExportKind::GeoJson
            | ExportKind::Shapefile
            | ExportKind::Csv => OwsService::Wfs,
            ExportKind::MapView
            | ExportKind::GeoTiff
            | ExportKind::Kml
            | ExportKind::Jpeg
            | ExportKind::Pdf => OwsService::Wms,
        }
    }
}

/// A labelled URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLink {
    pub kind: ExportKind,
    pub label: String,
    pub url: String,
}

/// Thumbnail plus export/view links for one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationData {
    pub thumbnail_url: String,
    pub links: Vec<ExportLink>,
}

impl PresentationData {
    /// Find the link of a given kind.
    pub fn link(&self, kind: ExportKind) -> Option<&ExportLink> {
        self.links.iter().find(|l| l.kind == kind)
    }

    /// URL of the link of a given kind.
    pub fn url(&self, kind: ExportKind) -> Option<&str> {
        self.link(kind).map(|l| l.url.as_str())
    }
}
