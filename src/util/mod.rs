//! Small shared helpers.

pub mod config;

/// What: Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Inputs:
/// - `secs`: Seconds since the Unix epoch
///
/// Output:
/// - Formatted string; an out-of-range value yields an empty string.
#[must_use]
pub fn ts_to_date(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// `true` when `text` has nothing worth translating.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
