//! Single-pass driver over the parsed rows.

use tracing::debug;

use crate::geojson::FeatureCollection;
use crate::stats::ConversionStats;
use crate::transform::row::{RowOutcome, transform_row};
use crate::transform::types::VenueRow;

/// Everything one conversion run produces.
#[derive(Debug)]
pub struct Conversion {
    pub collection: FeatureCollection,
    pub stats: ConversionStats,
}

impl Conversion {
    pub fn accepted(&self) -> usize {
        self.collection.len()
    }
}

/// Converts parsed rows into a feature collection plus summary statistics.
///
/// Rows are processed in input order; accepted features keep that order, and
/// dropped rows leave no trace beyond the drop counter. Malformed row data
/// never aborts the pass.
pub fn convert_rows(rows: &[VenueRow]) -> Conversion {
    let mut features = Vec::new();
    let mut stats = ConversionStats::new();

    for row in rows {
        match transform_row(row) {
            RowOutcome::Accepted {
                feature,
                correction,
            } => {
                stats.record(&feature.properties, correction);
                features.push(feature);
            }
            RowOutcome::Skipped => {
                debug!(id = %row.id, name = %row.name, "Row dropped: unusable coordinates");
                stats.record_dropped();
            }
        }
    }

    Conversion {
        collection: FeatureCollection::new(features),
        stats,
    }
}
