//! HTTP client for the video metadata endpoint
//!
//! One GET per call, no retries, no caching. The endpoint base is
//! injected so tests can point the client at a local mock server.

use url::{ParseError, Url};

use crate::api::VideoListResponse;
use crate::config;
use crate::duration::format_duration;
use crate::error::FetchError;

/// Client for the Data API v3 `videos` endpoint.
///
/// Holds a configured `reqwest::Client` plus the endpoint base and API
/// key; cheap to clone, safe to share across tasks.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl YoutubeClient {
    /// Create a client against the configured endpoint base
    /// (`YOUTUBE_API_BASE`, defaulting to the public Google endpoint).
    pub fn new(api_key: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_base_url(api_key, &config::YOUTUBE_API_BASE)
    }

    /// Create a client against an explicit endpoint base, e.g. a test
    /// double.
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config::network::timeout())
            .user_agent(config::network::USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
        })
    }

    /// Fetch the duration of a video and render it as a clock string.
    ///
    /// Returns `Ok(None)` when the API reports no items for this ID
    /// (deleted or private video) — that is an answer, not a failure.
    /// Transport and decode failures surface as [`FetchError`] verbatim;
    /// nothing is retried.
    ///
    /// A syntactically odd duration string degrades to `Some("")`, which
    /// callers display as "unknown".
    pub async fn fetch_duration(&self, video_id: &str) -> Result<Option<String>, FetchError> {
        let url = self.videos_url(video_id)?;

        log::debug!("Fetching contentDetails for video {}", video_id);
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Http(response.status()));
        }

        let decoded: VideoListResponse = response.json().await?;
        match decoded.items.first() {
            Some(item) => {
                let formatted = format_duration(&item.content_details.duration);
                if formatted.is_empty() {
                    log::warn!(
                        "Unparseable duration {:?} for video {}",
                        item.content_details.duration,
                        video_id
                    );
                }
                Ok(Some(formatted))
            }
            None => {
                log::debug!("No items returned for video {}", video_id);
                Ok(None)
            }
        }
    }

    /// Build `{base}/videos?id=...&part=contentDetails&key=...` with
    /// proper query encoding. The key travels in the query string, so the
    /// full URL is never logged.
    fn videos_url(&self, video_id: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty().push("videos");
        }
        url.query_pairs_mut()
            .append_pair("id", video_id)
            .append_pair("part", "contentDetails")
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> YoutubeClient {
        YoutubeClient::with_base_url("test-key", &server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_duration_success() {
        let mock_server = MockServer::start().await;

        let response_body = r#"{
            "items": [
                { "id": "dQw4w9WgXcQ", "contentDetails": { "duration": "PT3M33S" } }
            ]
        }"#;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("id", "dQw4w9WgXcQ"))
            .and(query_param("part", "contentDetails"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
            .mount(&mock_server)
            .await;

        let duration = client_for(&mock_server)
            .fetch_duration("dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(duration.as_deref(), Some("3:33"));
    }

    #[tokio::test]
    async fn test_fetch_duration_first_item_wins() {
        let mock_server = MockServer::start().await;

        let response_body = r#"{
            "items": [
                { "id": "aaaaaaaaaaa", "contentDetails": { "duration": "PT5S" } },
                { "id": "bbbbbbbbbbb", "contentDetails": { "duration": "PT1H" } }
            ]
        }"#;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
            .mount(&mock_server)
            .await;

        let duration = client_for(&mock_server)
            .fetch_duration("aaaaaaaaaaa")
            .await
            .unwrap();

        assert_eq!(duration.as_deref(), Some("5s"));
    }

    #[tokio::test]
    async fn test_fetch_duration_no_items() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "items": [] }"#))
            .mount(&mock_server)
            .await;

        let duration = client_for(&mock_server)
            .fetch_duration("dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(duration, None);
    }

    #[tokio::test]
    async fn test_fetch_duration_malformed_json_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).fetch_duration("dQw4w9WgXcQ").await;

        assert!(matches!(result, Err(FetchError::Reqwest(_))));
    }

    #[tokio::test]
    async fn test_fetch_duration_http_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).fetch_duration("dQw4w9WgXcQ").await;

        match result {
            Err(FetchError::Http(status)) => assert_eq!(status.as_u16(), 403),
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_duration_unparseable_duration_degrades() {
        let mock_server = MockServer::start().await;

        let response_body = r#"{
            "items": [
                { "id": "dQw4w9WgXcQ", "contentDetails": { "duration": "P1DT2H" } }
            ]
        }"#;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
            .mount(&mock_server)
            .await;

        let duration = client_for(&mock_server)
            .fetch_duration("dQw4w9WgXcQ")
            .await
            .unwrap();

        // Day components are outside the PT grammar; degrade, don't error
        assert_eq!(duration.as_deref(), Some(""));
    }
}
