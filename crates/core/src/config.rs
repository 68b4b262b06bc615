//! Configuration constants for the library

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Default base URL of the YouTube Data API v3.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API key
/// Read once at startup from the YOUTUBEDATAKEY environment variable.
/// Get one here: https://console.developers.google.com/apis/api/youtube.googleapis.com
pub static YOUTUBE_API_KEY: Lazy<Option<String>> = Lazy::new(|| {
    env::var("YOUTUBEDATAKEY").ok().filter(|k| !k.is_empty())
});

/// Base URL for the metadata endpoint
/// Read from the YOUTUBE_API_BASE environment variable, defaults to the
/// public Google endpoint. Overridable so tests can point at a local server.
pub static YOUTUBE_API_BASE: Lazy<String> = Lazy::new(|| {
    env::var("YOUTUBE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
});

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for HTTP requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 12;

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("tubetime/", env!("CARGO_PKG_VERSION"));

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
