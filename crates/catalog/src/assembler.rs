//! Joining layers to their providers.

use catalog_common::{
    CatalogError, CatalogResult, DirectoryEntry, DirectoryIndex, LayerRecord, PresentationData,
};
use ows_urls::ServiceUrlSynthesizer;
use serde::Serialize;

/// One row of the finished catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub layer: LayerRecord,
    pub provider: DirectoryEntry,
    pub presentation: PresentationData,
}

/// The finished catalog, in the order the loader produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CatalogView {
    entries: Vec<CatalogEntry>,
}

impl CatalogView {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

impl IntoIterator for CatalogView {
    type Item = CatalogEntry;
    type IntoIter = std::vec::IntoIter<CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a CatalogView {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Resolves providers and attaches presentation URLs. Performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct CatalogAssembler {
    synthesizer: ServiceUrlSynthesizer,
}

impl CatalogAssembler {
    pub fn new(synthesizer: ServiceUrlSynthesizer) -> Self {
        Self { synthesizer }
    }

    /// Join every layer to its provider, keeping the input order.
    ///
    /// The first layer with an unknown provider fails the whole build with
    /// `ReferenceError`; nothing built so far is returned.
    pub fn assemble(
        &self,
        directory: &DirectoryIndex,
        layers: Vec<LayerRecord>,
    ) -> CatalogResult<CatalogView> {
        let mut entries = Vec::with_capacity(layers.len());

        for layer in layers {
            let provider = directory.get(&layer.geoserver_name).ok_or_else(|| {
                CatalogError::ReferenceError {
                    layer: layer.name.clone(),
                    geoserver: layer.geoserver_name.clone(),
                }
            })?;

            let presentation = self.synthesizer.synthesize(&layer, provider);
            entries.push(CatalogEntry {
                layer,
                provider: provider.clone(),
                presentation,
            });
        }

        Ok(CatalogView { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_common::{BoundingBox, ExportKind};

    fn directory() -> DirectoryIndex {
        let entry = DirectoryEntry::new("geobolivia", "GeoBolivia", "https://geo.gob.bo/geoserver/wms");
        DirectoryIndex::from([(entry.name.clone(), entry)])
    }

    fn layer(name: &str, geoserver: &str) -> LayerRecord {
        LayerRecord::new(name, name, geoserver, BoundingBox::new(-70.0, -23.0, -57.0, -9.0))
    }

    #[test]
    fn test_assemble_preserves_order() {
        let view = CatalogAssembler::default()
            .assemble(
                &directory(),
                vec![layer("c", "geobolivia"), layer("b", "geobolivia"), layer("a", "geobolivia")],
            )
            .unwrap();

        let names: Vec<&str> = view.iter().map(|e| e.layer.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
        assert!(view.iter().all(|e| e.provider.name == "geobolivia"));
    }

    #[test]
    fn test_assemble_attaches_presentation() {
        let view = CatalogAssembler::default()
            .assemble(&directory(), vec![layer("rios", "geobolivia")])
            .unwrap();

        let entry = &view.entries()[0];
        assert!(entry
            .presentation
            .url(ExportKind::GeoTiff)
            .unwrap()
            .contains("layers=rios&format=image/geotiff"));
    }

    #[test]
    fn test_unknown_provider_fails_whole_build() {
        let result = CatalogAssembler::default().assemble(
            &directory(),
            vec![layer("a", "geobolivia"), layer("b", "nowhere"), layer("c", "geobolivia")],
        );

        match result {
            Err(CatalogError::ReferenceError { layer, geoserver }) => {
                assert_eq!(layer, "b");
                assert_eq!(geoserver, "nowhere");
            }
            other => panic!("expected ReferenceError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_gives_empty_view() {
        let view = CatalogAssembler::default()
            .assemble(&DirectoryIndex::new(), Vec::new())
            .unwrap();
        assert!(view.is_empty());
    }
}
