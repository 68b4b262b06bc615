//! Tubetime - YouTube video durations and link parsing
//!
//! This library fetches the duration of a YouTube video from the
//! Data API v3 `videos` endpoint and renders it as a compact clock
//! string, plus a helper to pull candidate video IDs out of free text.
//!
//! # Module Structure
//!
//! - `config`: Environment-based configuration (API key, endpoint base)
//! - `duration`: ISO-8601 duration parsing and clock formatting
//! - `error`: Fetch error types
//! - `fetch`: HTTP client for the metadata endpoint
//! - `links`: Video ID extraction from text

pub mod api;
pub mod config;
pub mod duration;
pub mod error;
pub mod fetch;
pub mod links;

// Re-export commonly used types for convenience
pub use duration::format_duration;
pub use error::FetchError;
pub use fetch::YoutubeClient;
pub use links::{extract_video_ids, VIDEO_ID_LEN};
