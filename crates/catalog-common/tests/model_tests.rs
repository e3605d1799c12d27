//! Tests for the catalog data model.

use catalog_common::{BoundingBox, DirectoryEntry, EndpointShape, ExportKind, OwsService};

// ============================================================================
// Endpoint shape
// ============================================================================

#[test]
fn test_shape_resolved_at_construction() {
    let reflect = DirectoryEntry::new("a", "A", "https://x/geoserver/ows");
    let generic = DirectoryEntry::new("b", "B", "https://x/geoserver/wfs");
    assert_eq!(reflect.shape, EndpointShape::ReflectStyle);
    assert_eq!(generic.shape, EndpointShape::GenericOgc);
}

#[test]
fn test_shape_ignores_query_like_suffixes() {
    assert_eq!(
        EndpointShape::detect("https://x/geoserver/ows?service=wms"),
        EndpointShape::GenericOgc
    );
    assert_eq!(EndpointShape::detect("/ows"), EndpointShape::ReflectStyle);
    assert_eq!(EndpointShape::detect(""), EndpointShape::GenericOgc);
}

#[test]
fn test_directory_list_deserializes() {
    let json = r#"[
        {"nombre": "a", "descripcion": "A", "ows": "https://a/geoserver/ows", "extra": 1},
        {"nombre": "b", "descripcion": "B", "ows": "https://b/geoserver/wms"}
    ]"#;
    let entries: Vec<DirectoryEntry> = serde_json::from_str(json).unwrap();
    let shapes: Vec<EndpointShape> = entries.iter().map(|e| e.shape).collect();
    assert_eq!(
        shapes,
        vec![EndpointShape::ReflectStyle, EndpointShape::GenericOgc]
    );
}

// ============================================================================
// Bounding box
// ============================================================================

#[test]
fn test_bbox_order_is_min_x_min_y_max_x_max_y() {
    let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bbox.to_wms_string(), "1,2,3,4");
}

#[test]
fn test_bbox_negative_and_fractional() {
    let bbox = BoundingBox::new(-69.645, -22.898, -57.453, -9.669);
    assert_eq!(bbox.to_wms_string(), "-69.645,-22.898,-57.453,-9.669");
}

// ============================================================================
// Export kinds
// ============================================================================

#[test]
fn test_export_formats() {
    assert_eq!(ExportKind::MapView.format(), "application/openlayers");
    assert_eq!(ExportKind::SampleFeature.format(), "application/json&count=1");
    assert_eq!(ExportKind::Shapefile.format(), "SHAPE-ZIP");
    assert_eq!(ExportKind::Kml.format(), "application/vnd.google-earth.kml");
}

#[test]
fn test_export_services() {
    assert_eq!(ExportKind::Csv.service(), OwsService::Wfs);
    assert_eq!(ExportKind::GeoTiff.service(), OwsService::Wms);
    assert_eq!(ExportKind::Pdf.service(), OwsService::Wms);
}
