//! Presentation URLs for a (layer, endpoint) pair.

use catalog_common::{
    DirectoryEntry, EndpointShape, ExportKind, ExportLink, LayerRecord, OwsService,
    PresentationData,
};

use crate::{GetFeatureRequest, GetMapRequest, ImageSize, MapImage};

/// Pattern the published catalog passes to a plain string replace when
/// deriving the reflector base. It is a literal, not a regex, so it
/// practically never occurs in an endpoint and the `/ows` segment stays.
const LITERAL_SUFFIX_PATTERN: &str = "//ows$/i";

/// Knobs for URL synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesizerOptions {
    /// Strip the trailing `/ows` before appending `/wms/reflect`.
    /// When false, output is byte-compatible with the published catalog
    /// (`.../geoserver/ows/wms/reflect`).
    pub strict_suffix_strip: bool,

    /// Size of exported map images on generic endpoints
    pub map_size: ImageSize,

    /// Size of the thumbnail image
    pub thumbnail_size: ImageSize,
}

impl Default for SynthesizerOptions {
    fn default() -> Self {
        Self {
            strict_suffix_strip: false,
            map_size: ImageSize::square(500),
            thumbnail_size: ImageSize::square(80),
        }
    }
}

/// Builds export, view and thumbnail URLs. Pure: same input, same output.
#[derive(Debug, Clone, Default)]
pub struct ServiceUrlSynthesizer {
    options: SynthesizerOptions,
}

impl ServiceUrlSynthesizer {
    pub fn new(options: SynthesizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SynthesizerOptions {
        &self.options
    }

    /// Thumbnail plus every [`ExportKind`] link, in display order.
    pub fn synthesize(&self, layer: &LayerRecord, endpoint: &DirectoryEntry) -> PresentationData {
        let links = ExportKind::ALL
            .iter()
            .map(|&kind| ExportLink {
                kind,
                label: kind.label().to_string(),
                url: self.export_url(layer, endpoint, kind),
            })
            .collect();

        PresentationData {
            thumbnail_url: self.thumbnail_url(layer, endpoint),
            links,
        }
    }

    /// URL of a single export/view link.
    pub fn export_url(
        &self,
        layer: &LayerRecord,
        endpoint: &DirectoryEntry,
        kind: ExportKind,
    ) -> String {
        match kind.service() {
            OwsService::Wfs => GetFeatureRequest::new(&layer.name, kind.format())
                .to_url(&endpoint.service_endpoint),
            OwsService::Wms => self.map_url(
                layer,
                endpoint,
                kind.format(),
                MapImage::Export,
                self.options.map_size,
            ),
        }
    }

    /// Small transparent JPEG preview.
    pub fn thumbnail_url(&self, layer: &LayerRecord, endpoint: &DirectoryEntry) -> String {
        self.map_url(
            layer,
            endpoint,
            ExportKind::Jpeg.format(),
            MapImage::Thumbnail,
            self.options.thumbnail_size,
        )
    }

    /// Base the `/wms/reflect` path is appended to.
    pub fn reflect_base(&self, service_endpoint: &str) -> String {
        if self.options.strict_suffix_strip {
            service_endpoint
                .strip_suffix(EndpointShape::REFLECT_SUFFIX)
                .unwrap_or(service_endpoint)
                .to_string()
        } else {
            service_endpoint.replacen(LITERAL_SUFFIX_PATTERN, "", 1)
        }
    }

    fn map_url(
        &self,
        layer: &LayerRecord,
        endpoint: &DirectoryEntry,
        format: &str,
        image: MapImage,
        size: ImageSize,
    ) -> String {
        let request = GetMapRequest {
            layer: &layer.name,
            format,
            image,
            size,
            bbox: layer.extent.clone(),
        };

        match endpoint.shape {
            EndpointShape::ReflectStyle => {
                request.to_reflect_url(&self.reflect_base(&endpoint.service_endpoint))
            }
            EndpointShape::GenericOgc => request.to_generic_url(&endpoint.service_endpoint),
        }
    }
}
