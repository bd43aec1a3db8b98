//! Terminal output utilities.
//!
//! Fields are quoted and right-aligned so the rows line up on screen while
//! still loading as CSV.

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Join `(value, width)` pairs into one comma separated row.
pub fn format_row(fields: &[(String, usize)]) -> String {
    fields
        .iter()
        .map(|(value, width)| format_field(value, *width))
        .collect::<Vec<String>>()
        .join(",")
}
