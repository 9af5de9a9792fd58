use crate::errors::ConfigError;
use crate::search::TerminationPolicy;
use dotenvy::dotenv;
use std::env;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.domain.com.au/v1/listings/residential/_search";

pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// The API refuses to page beyond this many records ("Cannot page beyond 1000 records").
pub const RESULT_CEILING: usize = 1000;

const API_KEY_VAR: &str = "DOMAIN_API_KEY";
const ENDPOINT_VAR: &str = "DOMAIN_API_URL";
const PAGE_SIZE_VAR: &str = "DOMAIN_PAGE_SIZE";
const CEILING_VAR: &str = "DOMAIN_RESULT_CEILING";

/// Where and how the client talks to the search endpoint.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub endpoint: Url,
}

impl ClientConfig {
    /// Uses the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: api_key.into(),
            endpoint: parse_endpoint(DEFAULT_ENDPOINT)?,
        })
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    /// Applies `DOMAIN_API_URL` when it is set.
    pub fn with_env_endpoint(self) -> Result<Self, ConfigError> {
        dotenv().ok();

        match env::var(ENDPOINT_VAR) {
            Ok(endpoint) => self.with_endpoint(&endpoint),
            Err(_) => Ok(self),
        }
    }

    /// Reads `DOMAIN_API_KEY` (required) and `DOMAIN_API_URL` (optional),
    /// loading a `.env` file first if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingVar(API_KEY_VAR))?;
        Self::new(api_key)?.with_env_endpoint()
    }
}

/// Pagination settings for a full search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    page_size: u32,
    pub policy: TerminationPolicy,
}

impl SearchConfig {
    pub fn new(page_size: u32, policy: TerminationPolicy) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self { page_size, policy })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Defaults overridden by `DOMAIN_PAGE_SIZE` and `DOMAIN_RESULT_CEILING`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let page_size = env_number(PAGE_SIZE_VAR)?.unwrap_or(DEFAULT_PAGE_SIZE);
        let ceiling = env_number(CEILING_VAR)?.unwrap_or(RESULT_CEILING);

        Self::new(
            page_size,
            TerminationPolicy::ShortPage {
                ceiling: Some(ceiling),
            },
        )
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            policy: TerminationPolicy::default(),
        }
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    Url::parse(endpoint).map_err(|source| ConfigError::InvalidUrl {
        url: endpoint.to_string(),
        source,
    })
}

fn env_number<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        Err(_) => Ok(None),
    }
}
