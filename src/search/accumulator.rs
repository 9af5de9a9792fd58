use crate::client::models::ResidentialSearchRequest;
use crate::client::FetchError;
use crate::config::{SearchConfig, RESULT_CEILING};
use tracing::{debug, info};

/// One HTTP round trip: the page named by `request.page_number`.
pub trait PageFetcher {
    type Record;

    fn fetch_page(&self, request: &ResidentialSearchRequest)
        -> Result<Vec<Self::Record>, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    type Record = F::Record;

    fn fetch_page(
        &self,
        request: &ResidentialSearchRequest,
    ) -> Result<Vec<Self::Record>, FetchError> {
        (**self).fetch_page(request)
    }
}

/// When a paginated search stops asking for more pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationPolicy {
    /// Keep fetching while fewer than `ceiling` records are held. Only an
    /// empty page ends the search early, so a short last page costs one
    /// extra request.
    CeilingFirst { ceiling: usize },

    /// Stop after an empty page or one shorter than the page size. With a
    /// ceiling, also stop as soon as it is reached.
    ShortPage { ceiling: Option<usize> },
}

impl TerminationPolicy {
    pub fn ceiling(&self) -> Option<usize> {
        match *self {
            TerminationPolicy::CeilingFirst { ceiling } => Some(ceiling),
            TerminationPolicy::ShortPage { ceiling } => ceiling,
        }
    }
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        TerminationPolicy::ShortPage {
            ceiling: Some(RESULT_CEILING),
        }
    }
}

pub struct SearchAccumulator<F> {
    fetcher: F,
    config: SearchConfig,
}

impl<F: PageFetcher> SearchAccumulator<F> {
    pub fn new(fetcher: F, config: SearchConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetches pages from zero until the policy says stop.
    ///
    /// The template's pagination fields are ignored. Results keep page
    /// order, and any fetch error discards everything gathered so far.
    pub fn search(
        &self,
        template: &ResidentialSearchRequest,
    ) -> Result<Vec<F::Record>, FetchError> {
        let page_size = self.config.page_size();
        let policy = self.config.policy;
        let ceiling = policy.ceiling();

        let mut request = template.clone();
        request.page_size = page_size;
        request.page_number = 0;

        let mut records = Vec::new();
        let mut pages = 0u32;

        loop {
            if ceiling.is_some_and(|c| records.len() >= c) {
                debug!(total = records.len(), "ceiling reached, not fetching further");
                break;
            }

            let mut page = self.fetcher.fetch_page(&request)?;
            pages += 1;
            let fetched = page.len();

            if fetched == 0 {
                debug!(page = request.page_number, "empty page, stopping");
                break;
            }

            if let Some(ceiling) = ceiling {
                page.truncate(ceiling.saturating_sub(records.len()));
            }
            records.extend(page);

            let short = fetched < page_size as usize;
            if short && matches!(policy, TerminationPolicy::ShortPage { .. }) {
                debug!(page = request.page_number, fetched, "short page, stopping");
                break;
            }

            request.page_number += 1;
        }

        info!(total = records.len(), pages, "search complete");
        Ok(records)
    }
}
