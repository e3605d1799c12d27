//! Service-endpoint descriptors (the provider directory).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Directory entries keyed by provider name.
pub type DirectoryIndex = HashMap<String, DirectoryEntry>;

/// Addressing convention of a service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointShape {
    /// Endpoint ends in `/ows`; map images go through the `/wms/reflect` path.
    ReflectStyle,
    /// Any other endpoint; requests carry explicit `service`/`request` parameters.
    GenericOgc,
}

impl EndpointShape {
    /// Literal suffix that marks a reflect-style endpoint.
    pub const REFLECT_SUFFIX: &'static str = "/ows";

    /// Classify an endpoint URL. The match is case-sensitive and anchored at the end.
    pub fn detect(service_endpoint: &str) -> Self {
        if service_endpoint.ends_with(Self::REFLECT_SUFFIX) {
            EndpointShape::ReflectStyle
        } else {
            EndpointShape::GenericOgc
        }
    }
}

/// One remote map service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DirectoryRecord")]
pub struct DirectoryEntry {
    /// Unique provider key
    pub name: String,

    /// Human-readable label of the provider
    pub description: String,

    /// Base URL of the OWS endpoint
    pub service_endpoint: String,

    /// Resolved once from `service_endpoint`
    pub shape: EndpointShape,

    /// WMS enabled in the directory
    pub wms: bool,

    /// WFS enabled in the directory
    pub wfs: bool,
}

impl DirectoryEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        service_endpoint: impl Into<String>,
    ) -> Self {
        let service_endpoint = service_endpoint.into();
        Self {
            name: name.into(),
            description: description.into(),
            shape: EndpointShape::detect(&service_endpoint),
            service_endpoint,
            wms: true,
            wfs: true,
        }
    }
}

/// Wire shape of a directory record. Accepts both the published field names
/// (`nombre`, `descripcion`, `ows`) and their English equivalents.
#[derive(Deserialize)]
struct DirectoryRecord {
    #[serde(alias = "nombre")]
    name: String,
    #[serde(default, alias = "descripcion")]
    description: Option<String>,
    #[serde(alias = "ows", alias = "serviceEndpoint")]
    service_endpoint: String,
    #[serde(default = "default_enabled")]
    wms: bool,
    #[serde(default = "default_enabled")]
    wfs: bool,
}

fn default_enabled() -> bool {
    true
}

impl From<DirectoryRecord> for DirectoryEntry {
    fn from(record: DirectoryRecord) -> Self {
        let mut entry = DirectoryEntry::new(
            record.name,
            record.description.unwrap_or_default(),
            record.service_endpoint,
        );
        entry.wms = record.wms;
        entry.wfs = record.wfs;
        entry
    }
}
