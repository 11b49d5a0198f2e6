//! Display helpers for backend timestamps.

use chrono::DateTime;

/// Short form used in lists and tables, e.g. `Jan 5, 2024 14:03`.
///
/// Anything that is not RFC 3339 is shown as received.
pub fn format_timestamp(raw: &str) -> String {
    format_with(raw, "%b %-d, %Y %H:%M")
}

/// Long form used on the profile page, e.g. `January 5, 2024 14:03`.
pub fn format_long_date(raw: &str) -> String {
    format_with(raw, "%B %-d, %Y %H:%M")
}

fn format_with(raw: &str, pattern: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format(pattern).to_string(),
        Err(_) => raw.to_string(),
    }
}
