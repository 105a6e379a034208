//! Phone-number cleanup for numeric-coercion artifacts.

/// Cleans a phone-like field.
///
/// Upstream spreadsheet handling leaves two artifacts: null-ish literals
/// (`nan`, `None`) and a `.0` suffix from integers round-tripped through
/// floating point. Both are removed; anything else passes through as-is.
pub fn clean_phone(value: &str) -> String {
    if value.is_empty() || value == "nan" || value == "None" {
        return String::new();
    }

    value.strip_suffix(".0").unwrap_or(value).to_string()
}
