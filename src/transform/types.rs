//! Record types shared across the transformation pipeline.

use serde::{Deserialize, Serialize};

/// One row of the venue CSV, keyed by the export's Chinese column headers.
///
/// Every field defaults to empty so a column missing from a given export
/// still deserializes; the pipeline treats absent and empty identically.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct VenueRow {
    #[serde(rename = "編號", default)]
    pub id: String,
    #[serde(rename = "行政區", default)]
    pub district: String,
    #[serde(rename = "廠商名稱〈市招〉", default)]
    pub name: String,
    #[serde(rename = "所屬單位", default)]
    pub owning_unit: String,
    #[serde(rename = "經營主體", default)]
    pub operator: String,
    #[serde(rename = "市話", default)]
    pub landline: String,
    #[serde(rename = "分機", default)]
    pub extension: String,
    #[serde(rename = "行動電話", default)]
    pub mobile: String,
    #[serde(rename = "地址", default)]
    pub address: String,
    #[serde(rename = "備註", default)]
    pub remark: String,
    #[serde(rename = "經度", default)]
    pub longitude: String,
    #[serde(rename = "緯度", default)]
    pub latitude: String,
}

/// A longitude the repair step changed, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongitudeCorrection {
    pub name: String,
    pub original: f64,
    pub fixed: f64,
}
