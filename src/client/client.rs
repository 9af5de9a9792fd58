// client.rs
use crate::client::models::{ResidentialSearchRequest, SearchResult};
use crate::client::FetchError;
use crate::config::{ClientConfig, SearchConfig};
use crate::errors::ConfigError;
use crate::search::{PageFetcher, SearchAccumulator};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "X-Api-Key";

pub struct DomainClient {
    client: Client,
    config: ClientConfig,
    search: SearchConfig,
}

impl DomainClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self::with_client(client, config))
    }

    /// Wraps an already configured blocking client.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self {
            client,
            config,
            search: SearchConfig::default(),
        }
    }

    pub fn with_search_config(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Runs every page of `request` and returns the concatenated results.
    pub fn search_residential(
        &self,
        request: &ResidentialSearchRequest,
    ) -> Result<Vec<SearchResult>, FetchError> {
        SearchAccumulator::new(self, self.search).search(request)
    }

    /// One round trip for the page `request.page_number` names.
    pub fn search_residential_page(
        &self,
        request: &ResidentialSearchRequest,
    ) -> Result<Vec<SearchResult>, FetchError> {
        let body = serde_json::to_vec(request).map_err(FetchError::Encode)?;
        let url = self.config.endpoint.as_str();

        info!(
            page = request.page_number,
            page_size = request.page_size,
            "making request for page #{}: {}",
            request.page_number,
            url
        );
        debug!(?request, "search request");

        let resp = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(ACCEPT, mime::APPLICATION_JSON.as_ref())
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        let text = resp.text().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            warn!(%status, body = %text, "search request rejected");
            return Err(FetchError::Status { status, body: text });
        }

        let page: Vec<SearchResult> = serde_json::from_str(&text).map_err(FetchError::Decode)?;
        info!("got {} listings", page.len());
        Ok(page)
    }
}

impl PageFetcher for DomainClient {
    type Record = SearchResult;

    fn fetch_page(
        &self,
        request: &ResidentialSearchRequest,
    ) -> Result<Vec<SearchResult>, FetchError> {
        self.search_residential_page(request)
    }
}
