use reqwest::StatusCode;
use thiserror::Error;

/// A single page request failed. Searches abort on the first one.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("couldn't encode search request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("got non-success status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("couldn't parse json: {0}")]
    Decode(#[source] serde_json::Error),
}
