// src/domain/listing.rs

use crate::client::models::{PropertyListing, SearchResult};
use std::fmt;
use tracing::warn;

/// A listing flattened out of the nested API shape, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSummary {
    pub listing_id: i64,
    pub headline: Option<String>,

    // Address
    pub address: Option<String>,
    pub suburb: String,
    pub state: String,
    pub postcode: Option<String>,

    pub property_type: Option<String>,
    pub bedrooms: Option<f32>,
    pub bathrooms: Option<f32>,
    pub carspaces: Option<i32>,

    pub display_price: Option<String>,
}

impl ListingSummary {
    /// Requires the suburb and state that identify where the listing is.
    pub fn from_listing(listing: &PropertyListing) -> Result<Self, String> {
        let details = &listing.property_details;

        let suburb = details
            .suburb
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("listing {}: missing or empty suburb", listing.id))?
            .to_string();

        let state = details
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("listing {}: missing or empty state", listing.id))?
            .to_string();

        Ok(Self {
            listing_id: listing.id,
            headline: listing.headline.clone(),
            address: details.displayable_address.clone(),
            suburb,
            state,
            postcode: details.postcode.clone(),
            property_type: details.property_type.clone(),
            bedrooms: details.bedrooms,
            bathrooms: details.bathrooms,
            carspaces: details.carspaces,
            display_price: listing
                .price_details
                .as_ref()
                .and_then(|p| p.display_price.clone()),
        })
    }

    /// One output line for `listing`. Falls back to the bare id when the
    /// listing can't be summarised.
    pub fn line_for(listing: &PropertyListing) -> String {
        match Self::from_listing(listing) {
            Ok(summary) => summary.to_string(),
            Err(e) => {
                warn!("printing id only: {e}");
                listing.id.to_string()
            }
        }
    }

    /// A line per listing in `results`, projects expanded, in result order.
    pub fn lines(results: &[SearchResult]) -> Vec<String> {
        results
            .iter()
            .flat_map(SearchResult::all_listings)
            .map(Self::line_for)
            .collect()
    }
}

impl fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} {}", self.listing_id, self.suburb, self.state)?;
        if let Some(postcode) = &self.postcode {
            write!(f, " {postcode}")?;
        }
        if let Some(kind) = &self.property_type {
            write!(f, "\t{kind}")?;
        }
        if let Some(beds) = self.bedrooms {
            write!(f, "\t{beds} bed")?;
        }
        if let Some(price) = &self.display_price {
            write!(f, "\t{price}")?;
        }
        Ok(())
    }
}
