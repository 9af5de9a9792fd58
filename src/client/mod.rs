#[allow(clippy::module_inception)]
mod client;
mod client_error;
pub mod models;

pub use client::DomainClient;
pub use client_error::FetchError;
