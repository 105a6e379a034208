//! GeoJSON output types for the venue feature collection.
//!
//! Plain serde structs rather than a geospatial crate: the output is a fixed
//! point-feature shape and the property keys must match the source export's
//! Chinese column labels exactly. Field declaration order fixes the key
//! order in the written file.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// `[longitude, latitude]`, per GeoJSON position order.
    pub coordinates: [f64; 2],
}

/// Properties carried on every feature.
#[derive(Debug, Clone, Serialize)]
pub struct VenueProperties {
    pub id: String,
    #[serde(rename = "行政區")]
    pub district: String,
    #[serde(rename = "名稱")]
    pub name: String,
    #[serde(rename = "所屬單位")]
    pub owning_unit: String,
    #[serde(rename = "經營主體")]
    pub operator: String,
    #[serde(rename = "市話")]
    pub landline: String,
    #[serde(rename = "分機")]
    pub extension: String,
    #[serde(rename = "行動電話")]
    pub mobile: String,
    #[serde(rename = "地址")]
    pub address: String,
    #[serde(rename = "場館類型")]
    pub venue_type: String,
    #[serde(rename = "原始備註")]
    pub remark: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: VenueProperties,
}

impl Feature {
    /// Builds a point feature at `(longitude, latitude)`.
    pub fn point(longitude: f64, latitude: f64, properties: VenueProperties) -> Self {
        Feature {
            feature_type: "Feature".to_string(),
            geometry: PointGeometry {
                geometry_type: "Point".to_string(),
                coordinates: [longitude, latitude],
            },
            properties,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            collection_type: "FeatureCollection".to_string(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
