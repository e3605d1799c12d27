//! Layer records as published in the catalog resource.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::BoundingBox;

/// One catalog row, validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    /// Technical layer name, as used in `layers=` / `typeName=`
    pub name: String,

    /// Human-readable title
    pub title: String,

    /// Optional abstract
    pub description: Option<String>,

    /// Provider key into the directory
    pub geoserver_name: String,

    /// First time the indexer saw this layer. Blank for layers of providers
    /// that were indexed for the first time.
    pub found_date: Option<NaiveDate>,

    /// Set once the layer disappeared from its provider
    pub removed_date: Option<NaiveDate>,

    /// Spatial extent, opaque to the catalog
    pub extent: BoundingBox,

    /// EPSG code of the extent, when the source carries it
    pub epsg: Option<u32>,

    /// Available through WMS at last indexing
    pub wms: Option<bool>,

    /// Available through WFS at last indexing
    pub wfs: Option<bool>,
}

impl LayerRecord {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        geoserver_name: impl Into<String>,
        extent: BoundingBox,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: None,
            geoserver_name: geoserver_name.into(),
            found_date: None,
            removed_date: None,
            extent,
            epsg: None,
            wms: None,
            wfs: None,
        }
    }

    /// A layer is active until it has a removal date.
    pub fn is_active(&self) -> bool {
        self.removed_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        let mut layer = LayerRecord::new(
            "rios",
            "Ríos",
            "geobolivia",
            BoundingBox::new(-70.0, -23.0, -57.0, -9.0),
        );
        assert!(layer.is_active());

        layer.removed_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert!(!layer.is_active());
    }
}
