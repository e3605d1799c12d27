//! WFS GetFeature request URLs.

/// A GetFeature request for a whole feature type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFeatureRequest<'a> {
    /// Feature type name (the layer name)
    pub type_name: &'a str,
    /// Value of `outputFormat`
    pub output_format: &'a str,
}

impl<'a> GetFeatureRequest<'a> {
    pub fn new(type_name: &'a str, output_format: &'a str) -> Self {
        Self {
            type_name,
            output_format,
        }
    }

    /// Build the request against an endpoint, used as-is for both endpoint shapes.
    pub fn to_url(&self, endpoint: &str) -> String {
        format!(
            "{}?service=wfs&request=GetFeature&typeName={}&outputFormat={}",
            endpoint, self.type_name, self.output_format
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_feature_url() {
        let req = GetFeatureRequest::new("geobolivia:rios", "SHAPE-ZIP");
        assert_eq!(
            req.to_url("https://geo.gob.bo/geoserver/ows"),
            "https://geo.gob.bo/geoserver/ows?service=wfs&request=GetFeature&typeName=geobolivia:rios&outputFormat=SHAPE-ZIP"
        );
    }
}
