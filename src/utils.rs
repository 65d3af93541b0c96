//! Helpers for timestamp parsing and release URL rewriting.

use chrono::{DateTime, NaiveDate};

/// Timestamp layout used by the feed, e.g. `2024-01-02 10:00:00+0000`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%z";

/// Parse a feed timestamp and return its calendar date.
///
/// The date is taken in the timestamp's own offset, so
/// `2024-01-02 23:30:00-0500` stays on `2024-01-02`.
///
/// # Errors
///
/// Returns the `chrono` parse error if `value` does not match
/// [`RELEASE_DATE_FORMAT`].
pub fn release_calendar_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    DateTime::parse_from_str(value, RELEASE_DATE_FORMAT).map(|dt| dt.date_naive())
}

/// Turn an asset download URL into the URL of its release page.
///
/// Every literal `download` becomes `tag`, then the last `/`-delimited
/// component is dropped. A URL without any `/` is returned after the
/// replacement only.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     rewrite_release_url("https://github.com/o/r/releases/download/v1/foo.pax.Z"),
///     "https://github.com/o/r/releases/tag/v1"
/// );
/// ```
pub fn rewrite_release_url(url: &str) -> String {
    let tagged = url.replace("download", "tag");
    match tagged.rsplit_once('/') {
        Some((head, _)) => head.to_string(),
        None => tagged,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (backing off to a char boundary) with
/// an ellipsis and byte count appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
