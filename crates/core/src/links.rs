//! Video ID extraction from free text
//!
//! Recognizes the two common YouTube link shapes:
//! - `watch?v=<id>` query parameters
//! - `youtu.be/<id>` short links

use once_cell::sync::Lazy;
use regex::Regex;

/// YouTube video IDs are exactly 11 characters
pub const VIDEO_ID_LEN: usize = 11;

/// Regex for video IDs embedded in links, e.g. "v=dQw4w9WgXcQ"
static VIDEO_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|youtu\.be/)([0-9A-Za-z_-]{11})").unwrap());

/// Extract candidate video IDs from arbitrary text
///
/// Matches are returned in input order with duplicates preserved. This is
/// purely a text-pattern operation; nothing checks that an extracted ID
/// names a real video.
///
/// # Examples
///
/// ```
/// use tubetime_core::links::extract_video_ids;
///
/// let ids = extract_video_ids("see https://youtu.be/dQw4w9WgXcQ for details");
/// assert_eq!(ids, vec!["dQw4w9WgXcQ"]);
///
/// assert!(extract_video_ids("no links here").is_empty());
/// ```
pub fn extract_video_ids(text: &str) -> Vec<String> {
    VIDEO_ID_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
