//! Bounding box of a layer's spatial extent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A layer extent in the coordinate reference system of its endpoint.
///
/// Values are carried verbatim: no normalisation or reordering happens, even
/// when `min_x > max_x`. A box read from a source table keeps the original
/// cell text, which is what gets rendered into request URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,

    /// Source text of `[min_x, min_y, max_x, max_y]`
    #[serde(skip)]
    source_text: Option<[String; 4]>,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            source_text: None,
        }
    }

    /// Keep the text the coordinates were parsed from, in
    /// `[min_x, min_y, max_x, max_y]` order.
    pub fn with_source_text(mut self, text: [String; 4]) -> Self {
        self.source_text = Some(text);
        self
    }

    pub fn source_text(&self) -> Option<&[String; 4]> {
        self.source_text.as_ref()
    }

    /// Render as a WMS BBOX parameter value: "minx,miny,maxx,maxy"
    pub fn to_wms_string(&self) -> String {
        self.to_string()
    }
}

/// Boxes compare by coordinate; `-70.000000` and `-70` are the same corner.
impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.min_x == other.min_x
            && self.min_y == other.min_y
            && self.max_x == other.max_x
            && self.max_y == other.max_y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_text {
            Some([min_x, min_y, max_x, max_y]) => {
                write!(f, "{},{},{},{}", min_x, min_y, max_x, max_y)
            }
            None => write!(f, "{},{},{},{}", self.min_x, self.min_y, self.max_x, self.max_y),
        }
    }
}
