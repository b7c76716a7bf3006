//! Facet label cleanup
//!
//! Upstream records sometimes carry legacy numeric codes (e.g. `sector: 1`)
//! in fields that are otherwise display labels. Such values never become a
//! facet option and compare as the fallback label instead.

/// Placeholder label for records without a usable sector/industry.
pub const GENERAL_LABEL: &str = "General";

/// True if `value` is a bare number such as `"7"` or `" 12 "`.
pub fn is_numeric_code(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Returns the value as a displayable label, or None if it is empty,
/// whitespace-only or a numeric code.
pub fn clean_label(value: &str) -> Option<&str> {
    if value.trim().is_empty() || is_numeric_code(value) {
        None
    } else {
        Some(value)
    }
}

/// Returns the displayable label, falling back to `"General"`.
pub fn label_or_general(value: Option<&str>) -> &str {
    value.and_then(clean_label).unwrap_or(GENERAL_LABEL)
}
