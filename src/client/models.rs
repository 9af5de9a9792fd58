use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// Request body for POST /v1/listings/residential/_search
//
// ResidentialSearchRequest
//  ├── listingType
//  ├── propertyTypes[]
//  ├── min/max Bedrooms, Bathrooms, Carspaces, Price, LandArea
//  ├── locations[]
//  │    ├── state, region, area, suburb, postCode
//  │    └── includeSurroundingSuburbs
//  ├── keywords[]
//  ├── sort
//  │    ├── sortKey
//  │    └── direction
//  ├── pageSize
//  └── pageNumber

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListingType {
    #[default]
    Sale,
    Rent,
    Share,
    Sold,
    NewHomes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentialSearchRequest {
    pub listing_type: ListingType,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_carspaces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_carspaces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_land_area: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_land_area: Option<u32>,

    #[serde(default)]
    pub locations: Vec<LocationFilter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortBy>,

    // Pagination, overwritten by the search loop.
    pub page_size: u32,
    pub page_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    pub state: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub suburb: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default)]
    pub include_surrounding_suburbs: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortBy {
    pub sort_key: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

// Response body: a JSON array of SearchResult
//
// SearchResult
//  ├── type                  ("PropertyListing" | "Project")
//  ├── listing               (PropertyListing results)
//  │    ├── id
//  │    ├── listingType
//  │    ├── headline
//  │    ├── dateListed
//  │    ├── priceDetails
//  │    │    └── displayPrice
//  │    └── propertyDetails
//  │         ├── state, suburb, postcode, displayableAddress
//  │         ├── propertyType
//  │         ├── bathrooms, bedrooms, carspaces
//  │         └── latitude, longitude
//  ├── project               (Project results)
//  └── listings[]            (child listings of a project)

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    pub listing: Option<PropertyListing>,
    pub project: Option<Project>,
    #[serde(default)]
    pub listings: Vec<PropertyListing>,
}

impl SearchResult {
    /// The listing of a property result, or the child listings of a project.
    pub fn all_listings(&self) -> impl Iterator<Item = &PropertyListing> {
        self.listing.iter().chain(self.listings.iter())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: i64,
    pub listing_type: Option<String>,
    pub headline: Option<String>,
    pub summary_description: Option<String>,
    pub listing_slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub date_listed: Option<NaiveDateTime>,
    pub price_details: Option<PriceDetails>,
    #[serde(default)]
    pub property_details: PropertyDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetails {
    pub display_price: Option<String>,
    pub price: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub state: Option<String>,
    pub property_type: Option<String>,
    pub bathrooms: Option<f32>,
    pub bedrooms: Option<f32>,
    pub carspaces: Option<i32>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub displayable_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: Option<String>,
    pub project_slug: Option<String>,
}

// Offset timestamps are normalised to UTC; anything unparsable decodes as None.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::String(raw)) = raw else {
        return Ok(None);
    };

    Ok(raw.parse::<NaiveDateTime>().ok().or_else(|| {
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).naive_utc())
    }))
}
