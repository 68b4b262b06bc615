//! Response model for the Data API v3 `videos` endpoint
//!
//! Only the fields this library consults are modeled; serde skips the
//! rest of the payload (etag, kind, pageInfo, ...).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(rename = "contentDetails")]
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    pub duration: String,
}
