//! ISO-8601 duration parsing and clock formatting
//!
//! The Data API reports durations as ISO-8601 strings like `PT4M5S`
//! (4 minutes 5 seconds). This module parses the `PT(<n>H)?(<n>M)?(<n>S)?`
//! grammar at arbitrary magnitudes and renders the result as a compact
//! clock string:
//! - `15:04:05` (hours present)
//! - `4:05` (minutes and seconds)
//! - `5s` (bare seconds, suffixed so they can't be read as minutes)

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for ISO-8601 time durations like "PT15H4M5S", "PT4M5S", "PT5S"
static ISO8601_DURATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap());

/// Parse an ISO-8601 duration into total seconds
///
/// Handles any component magnitude (`PT150H`, `PT96M`). At least one of
/// the H/M/S components must be present; `"PT"` alone, the empty string,
/// and anything outside the grammar yield `None`.
///
/// # Examples
///
/// ```
/// use tubetime_core::duration::parse_iso8601;
///
/// assert_eq!(parse_iso8601("PT4M5S"), Some(245));
/// assert_eq!(parse_iso8601("PT15H4M5S"), Some(54245));
/// assert_eq!(parse_iso8601("garbage"), None);
/// ```
pub fn parse_iso8601(raw: &str) -> Option<u64> {
    let caps = ISO8601_DURATION_REGEX.captures(raw.trim())?;

    // "PT" with no components matches the regex but is not a duration
    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return None;
    }

    let hours = parse_component(caps.get(1))?;
    let minutes = parse_component(caps.get(2))?;
    let seconds = parse_component(caps.get(3))?;

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// An absent component counts as zero; a present one that doesn't fit in
/// u64 rejects the whole duration.
fn parse_component(m: Option<regex::Match<'_>>) -> Option<u64> {
    match m {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

/// Format a second count for display
///
/// `H:MM:SS` when there is an hour component, `M:SS` when there are
/// minutes, otherwise bare seconds with an `s` suffix (`"5s"`) so a
/// lone number is not mistaken for a minute count.
pub fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Convert an API duration string to a clock string
///
/// Unparseable input degrades to an empty string rather than an error;
/// the caller treats `""` as "unknown duration".
///
/// # Examples
///
/// ```
/// use tubetime_core::duration::format_duration;
///
/// assert_eq!(format_duration("PT4M5S"), "4:05");
/// assert_eq!(format_duration("PT5S"), "5s");
/// assert_eq!(format_duration("not a duration"), "");
/// ```
pub fn format_duration(raw: &str) -> String {
    match parse_iso8601(raw) {
        Some(total) => format_clock(total),
        None => String::new(),
    }
}
