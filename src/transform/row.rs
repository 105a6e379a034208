//! Per-row transformation: one CSV row in, at most one GeoJSON feature out.

use crate::geojson::{Feature, VenueProperties};
use crate::transform::classify::classify;
use crate::transform::longitude::fix_longitude;
use crate::transform::phone::clean_phone;
use crate::transform::types::{LongitudeCorrection, VenueRow};

/// Result of transforming one row.
#[derive(Debug)]
pub enum RowOutcome {
    /// The row produced a feature, possibly with a longitude repair to log.
    Accepted {
        feature: Feature,
        correction: Option<LongitudeCorrection>,
    },
    /// The row had no usable coordinates and was dropped.
    Skipped,
}

/// Transforms a single venue row.
///
/// Coordinate failures skip the row; every other malformed field degrades to
/// a default. Never errors.
pub fn transform_row(row: &VenueRow) -> RowOutcome {
    let Some(lon) = fix_longitude(&row.longitude) else {
        return RowOutcome::Skipped;
    };
    if row.latitude.is_empty() {
        return RowOutcome::Skipped;
    }
    let Ok(lat) = row.latitude.trim().parse::<f64>() else {
        return RowOutcome::Skipped;
    };

    // Best-effort reparse of the raw value; an unparseable original reads as
    // 0 and therefore never logs a correction on its own.
    let original: f64 = row.longitude.trim().parse().unwrap_or(0.0);
    let correction = if original < 100.0 && lon > 100.0 {
        Some(LongitudeCorrection {
            name: row.name.clone(),
            original,
            fixed: lon,
        })
    } else {
        None
    };

    let category = classify(&row.remark);

    let properties = VenueProperties {
        id: row.id.clone(),
        district: row.district.clone(),
        name: row.name.clone(),
        owning_unit: row.owning_unit.clone(),
        operator: row.operator.clone(),
        landline: clean_phone(&row.landline),
        extension: clean_phone(&row.extension),
        mobile: clean_phone(&row.mobile),
        address: row.address.clone(),
        venue_type: category.label().to_string(),
        remark: row.remark.clone(),
        icon: category.icon().to_string(),
    };

    RowOutcome::Accepted {
        feature: Feature::point(lon, lat, properties),
        correction,
    }
}
