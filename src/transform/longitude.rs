//! Longitude repair for a known truncation artifact in the source data.

/// Repairs a raw longitude value.
///
/// Taipei sits near longitude 121.x; exported values in the low twenties
/// have lost their leading `1`, so anything strictly between 20 and 30 gets
/// 100 added back. Plausible values pass through unchanged, which also makes
/// the repair idempotent.
///
/// Returns `None` when the value does not parse as a number; the caller
/// drops the row.
pub fn fix_longitude(raw: &str) -> Option<f64> {
    let lon: f64 = raw.trim().parse().ok()?;

    if lon < 100.0 && lon > 20.0 && lon < 30.0 {
        Some(lon + 100.0)
    } else {
        Some(lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_values_get_offset() {
        assert!((fix_longitude("25.04").unwrap() - 125.04).abs() < 1e-9);
        assert!((fix_longitude("21.5266").unwrap() - 121.5266).abs() < 1e-9);
        assert!((fix_longitude("20.0001").unwrap() - 120.0001).abs() < 1e-9);
        assert!((fix_longitude("29.9999").unwrap() - 129.9999).abs() < 1e-9);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(fix_longitude("20"), Some(20.0));
        assert_eq!(fix_longitude("30"), Some(30.0));
        assert_eq!(fix_longitude("19.9"), Some(19.9));
        assert_eq!(fix_longitude("30.1"), Some(30.1));
    }

    #[test]
    fn test_plausible_values_unchanged() {
        assert_eq!(fix_longitude("121.5266"), Some(121.5266));
        assert_eq!(fix_longitude("100"), Some(100.0));
        assert_eq!(fix_longitude("0"), Some(0.0));
        assert_eq!(fix_longitude("-121.5"), Some(-121.5));
    }

    #[test]
    fn test_repair_is_idempotent() {
        let once = fix_longitude("25.04").unwrap();
        let twice = fix_longitude(&once.to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unparseable_is_invalid() {
        assert_eq!(fix_longitude(""), None);
        assert_eq!(fix_longitude("abc"), None);
        assert_eq!(fix_longitude("12,5"), None);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(fix_longitude(" 121.5 "), Some(121.5));
    }
}
