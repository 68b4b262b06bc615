use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed with status: {0}")]
    Http(reqwest::StatusCode),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid endpoint base URL: {0}")]
    BaseUrl(#[from] ParseError),
}
