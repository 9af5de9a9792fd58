use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use domain_search::{
    ClientConfig, DomainClient, ListingSummary, ListingType, LocationFilter,
    ResidentialSearchRequest, SearchConfig, TerminationPolicy,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Stop after a short or empty page
    ShortPage,
    /// Keep paging until the ceiling or an empty page
    CeilingFirst,
}

/// Lists current rentals in Pyrmont, NSW.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Domain API key (falls back to DOMAIN_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    #[arg(long, default_value_t = domain_search::config::DEFAULT_PAGE_SIZE)]
    page_size: u32,

    #[arg(long, value_enum, default_value_t = Policy::ShortPage)]
    policy: Policy,

    #[arg(long, default_value_t = domain_search::config::RESULT_CEILING)]
    ceiling: usize,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match args.api_key {
        Some(key) => ClientConfig::new(key)?.with_env_endpoint()?,
        None => ClientConfig::from_env().context("no --api-key given")?,
    };

    let policy = match args.policy {
        Policy::ShortPage => TerminationPolicy::ShortPage {
            ceiling: Some(args.ceiling),
        },
        Policy::CeilingFirst => TerminationPolicy::CeilingFirst {
            ceiling: args.ceiling,
        },
    };

    let client =
        DomainClient::new(config)?.with_search_config(SearchConfig::new(args.page_size, policy)?);

    let request = ResidentialSearchRequest {
        listing_type: ListingType::Rent,
        locations: vec![LocationFilter {
            state: "NSW".into(),
            suburb: "Pyrmont".into(),
            include_surrounding_suburbs: false,
            ..Default::default()
        }],
        ..Default::default()
    };

    let results = client
        .search_residential(&request)
        .context("error searching")?;

    for line in ListingSummary::lines(&results) {
        println!("{line}");
    }

    Ok(())
}
