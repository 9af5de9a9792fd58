//! Client for the Domain residential listings search API.
//!
//! [`DomainClient`] posts one search page at a time; [`SearchAccumulator`]
//! walks the pages of a query and concatenates the results.

pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod search;

pub use client::models::{ListingType, LocationFilter, ResidentialSearchRequest, SearchResult};
pub use client::{DomainClient, FetchError};
pub use config::{ClientConfig, SearchConfig};
pub use domain::ListingSummary;
pub use errors::ConfigError;
pub use search::{PageFetcher, SearchAccumulator, TerminationPolicy};

#[cfg(test)]
mod tests;
