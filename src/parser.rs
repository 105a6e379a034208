//! CSV decoding for the municipal sports-venue export.

use anyhow::Result;

use crate::transform::types::VenueRow;

/// Byte-order mark the `utf-8-sig` export prepends to the header row.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Decodes CSV bytes into venue rows.
///
/// The export is UTF-8 with a BOM, which is stripped so the first header
/// name matches. Records shorter than the header row are tolerated; the
/// missing fields deserialize as empty strings.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 CSV or a record cannot
/// be deserialized.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<VenueRow>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: VenueRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_rows() {
        let csv = "編號,行政區,廠商名稱〈市招〉,經度,緯度,備註\n\
                   1,中山區,運動中心,121.5266,25.0685,健身房\n\
                   2,大安區,游泳館,121.5436,25.0329,室內游泳池\n";

        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[0].district, "中山區");
        assert_eq!(rows[0].name, "運動中心");
        assert_eq!(rows[0].longitude, "121.5266");
        assert_eq!(rows[1].remark, "室內游泳池");
    }

    #[test]
    fn test_bom_is_stripped() {
        let csv = "\u{feff}編號,經度,緯度\n9,121.5,25.0\n";

        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        // Without the strip the first header would be "\u{feff}編號" and the
        // id would deserialize as empty.
        assert_eq!(rows[0].id, "9");
    }

    #[test]
    fn test_absent_columns_default_to_empty() {
        let csv = "編號,經度,緯度\n1,121.5,25.0\n";

        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].district, "");
        assert_eq!(rows[0].remark, "");
        assert_eq!(rows[0].landline, "");
    }

    #[test]
    fn test_unknown_columns_are_ignored() {
        let csv = "編號,經度,緯度,核准日期\n1,121.5,25.0,2025-12-01\n";

        let rows = parse_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].id, "1");
    }

    #[test]
    fn test_short_records_are_tolerated() {
        let csv = "編號,行政區,經度,緯度\n1,中山區\n";

        let rows = parse_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].district, "中山區");
        assert_eq!(rows[0].longitude, "");
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(parse_rows(b"").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes = [0xE7u8, 0xB7, 0xA8, 0xFF, 0x2C, 0x41, 0x0A, 0x42, 0x2C, 0x43];
        assert!(parse_rows(&bytes).is_err());
    }
}
