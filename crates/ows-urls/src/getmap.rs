//! WMS GetMap request URLs in both endpoint conventions.

use catalog_common::BoundingBox;
use serde::{Deserialize, Serialize};

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

/// What the map image is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapImage {
    /// A downloadable/viewable export
    Export,
    /// The small transparent preview shown next to a catalog entry
    Thumbnail,
}

/// A GetMap request for a single layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GetMapRequest<'a> {
    pub layer: &'a str,
    pub format: &'a str,
    pub image: MapImage,
    pub size: ImageSize,
    pub bbox: BoundingBox,
}

impl GetMapRequest<'_> {
    /// Full KVP request: `?service=wms&request=GetMap&...&bbox=minx,miny,maxx,maxy`.
    ///
    /// Size and bbox are always present; thumbnails additionally request transparency.
    pub fn to_generic_url(&self, endpoint: &str) -> String {
        let mut url = format!(
            "{}?service=wms&request=GetMap&layers={}&format={}",
            endpoint, self.layer, self.format
        );
        if self.image == MapImage::Thumbnail {
            url.push_str("&transparent=true");
        }
        url.push_str(&format!(
            "&width={}&height={}&bbox={}",
            self.size.width,
            self.size.height,
            self.bbox.to_wms_string()
        ));
        url
    }

    /// Reflector request: `{base}/wms/reflect?layers=..&format=..`.
    ///
    /// The reflector infers the extent from the layer, so no bbox is sent.
    /// Only thumbnails carry transparency and size.
    pub fn to_reflect_url(&self, reflect_base: &str) -> String {
        let mut url = format!(
            "{}/wms/reflect?layers={}&format={}",
            reflect_base, self.layer, self.format
        );
        if self.image == MapImage::Thumbnail {
            url.push_str(&format!(
                "&transparent=true&width={}&height={}",
                self.size.width, self.size.height
            ));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(image: MapImage) -> GetMapRequest<'static> {
        GetMapRequest {
            layer: "rios",
            format: "image/jpeg",
            image,
            size: ImageSize::new(80, 60),
            bbox: BoundingBox::new(-70.0, -23.0, -57.0, -9.0),
        }
    }

    #[test]
    fn test_generic_export() {
        assert_eq!(
            request(MapImage::Export).to_generic_url("https://x/geoserver/wms"),
            "https://x/geoserver/wms?service=wms&request=GetMap&layers=rios&format=image/jpeg&width=80&height=60&bbox=-70,-23,-57,-9"
        );
    }

    #[test]
    fn test_generic_thumbnail() {
        assert_eq!(
            request(MapImage::Thumbnail).to_generic_url("https://x/geoserver/wms"),
            "https://x/geoserver/wms?service=wms&request=GetMap&layers=rios&format=image/jpeg&transparent=true&width=80&height=60&bbox=-70,-23,-57,-9"
        );
    }

    #[test]
    fn test_reflect_export_has_no_size_or_bbox() {
        let url = request(MapImage::Export).to_reflect_url("https://x/geoserver");
        assert_eq!(
            url,
            "https://x/geoserver/wms/reflect?layers=rios&format=image/jpeg"
        );
    }

    #[test]
    fn test_reflect_thumbnail() {
        let url = request(MapImage::Thumbnail).to_reflect_url("https://x/geoserver");
        assert_eq!(
            url,
            "https://x/geoserver/wms/reflect?layers=rios&format=image/jpeg&transparent=true&width=80&height=60"
        );
    }
}
