// errors.rs
use thiserror::Error;

/// Errors raised while assembling client or search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid endpoint url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
