//! Output writers and the console summary.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use tracing::{info, warn};

use crate::geojson::FeatureCollection;
use crate::pipeline::Conversion;
use crate::transform::types::LongitudeCorrection;

/// Writes the feature collection as pretty-printed GeoJSON.
///
/// `serde_json` leaves non-ASCII text unescaped, so the Chinese property
/// values stay readable in the file.
pub fn write_feature_collection(path: &str, collection: &FeatureCollection) -> Result<()> {
    let json = serde_json::to_string_pretty(collection)?;
    fs::write(path, json)?;

    Ok(())
}

/// One label/count pair in the report.
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Machine-readable run summary, written next to the GeoJSON on request.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub generated_at: DateTime<Utc>,
    pub accepted: usize,
    pub dropped: usize,
    pub venue_types: Vec<CategoryCount>,
    pub top_districts: Vec<CategoryCount>,
    pub corrections: Vec<LongitudeCorrection>,
}

impl ConversionReport {
    pub fn from_conversion(conversion: &Conversion) -> Self {
        let stats = &conversion.stats;

        ConversionReport {
            generated_at: Utc::now(),
            accepted: conversion.accepted(),
            dropped: stats.dropped,
            venue_types: to_counts(stats.venue_types.most_common(None)),
            top_districts: to_counts(stats.districts.most_common(Some(5))),
            corrections: stats.corrections.clone(),
        }
    }
}

fn to_counts(entries: Vec<(String, usize)>) -> Vec<CategoryCount> {
    entries
        .into_iter()
        .map(|(label, count)| CategoryCount { label, count })
        .collect()
}

/// Writes the run summary as pretty-printed JSON.
pub fn write_report(path: &str, report: &ConversionReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;

    Ok(())
}

/// Logs the run summary: totals, venue-type counts, the top-5 districts, and
/// any longitude repairs.
pub fn print_summary(conversion: &Conversion) {
    let stats = &conversion.stats;

    info!(
        accepted = conversion.accepted(),
        dropped = stats.dropped,
        "Conversion finished"
    );

    for (venue_type, count) in stats.venue_types.most_common(None) {
        info!(venue_type = %venue_type, count, "Venue type");
    }

    for (district, count) in stats.districts.most_common(Some(5)) {
        info!(district = %district, count, "District (top 5)");
    }

    if !stats.corrections.is_empty() {
        warn!(
            fixed = stats.corrections.len(),
            "Abnormal longitude(s) repaired"
        );
        for correction in &stats.corrections {
            warn!(
                name = %correction.name,
                original = correction.original,
                fixed = correction.fixed,
                "Longitude repaired"
            );
        }
    }
}
