//! OGC WMS/WFS request URL synthesis for catalog layers.
//!
//! Supports:
//! - Generic OGC endpoints (KVP `service=`/`request=` parameters)
//! - Reflect-style endpoints (`/ows` base rewritten to `/wms/reflect`)

pub mod getfeature;
pub mod getmap;
pub mod synthesizer;

pub use getfeature::GetFeatureRequest;
pub use getmap::{GetMapRequest, ImageSize, MapImage};
pub use synthesizer::{ServiceUrlSynthesizer, SynthesizerOptions};
