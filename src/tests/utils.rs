use crate::client::models::ResidentialSearchRequest;
use crate::client::FetchError;
use crate::search::PageFetcher;
use reqwest::StatusCode;
use std::cell::RefCell;

/// Serves `total` numbered records, one slice per requested page, and records
/// every request it sees.
pub struct FakeFetcher {
    total: usize,
    always_full: bool,
    fail_on_page: Option<u32>,
    pub calls: RefCell<Vec<(u32, u32)>>,
}

impl FakeFetcher {
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            always_full: false,
            fail_on_page: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every page is full, however many have been served.
    pub fn always_full() -> Self {
        Self {
            always_full: true,
            ..Self::with_total(0)
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.calls.borrow().iter().map(|(page, _)| *page).collect()
    }
}

impl PageFetcher for FakeFetcher {
    type Record = usize;

    fn fetch_page(&self, request: &ResidentialSearchRequest) -> Result<Vec<usize>, FetchError> {
        self.calls
            .borrow_mut()
            .push((request.page_number, request.page_size));

        if self.fail_on_page == Some(request.page_number) {
            return Err(FetchError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".into(),
            });
        }

        let size = request.page_size as usize;
        let start = request.page_number as usize * size;
        let end = if self.always_full {
            start + size
        } else {
            (start + size).min(self.total)
        };

        Ok((start..end.max(start)).collect())
    }
}

pub fn pyrmont_rentals() -> ResidentialSearchRequest {
    use crate::client::models::{ListingType, LocationFilter};

    ResidentialSearchRequest {
        listing_type: ListingType::Rent,
        locations: vec![LocationFilter {
            state: "NSW".into(),
            suburb: "Pyrmont".into(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub const LISTING_JSON: &str = r#"{
    "type": "PropertyListing",
    "listing": {
        "listingType": "Rent",
        "id": 2016123456,
        "headline": "Harbour views",
        "dateListed": "2020-04-29T13:36:22",
        "priceDetails": { "displayPrice": "$950 per week" },
        "propertyDetails": {
            "state": "NSW",
            "propertyType": "ApartmentUnitFlat",
            "bathrooms": 1.0,
            "bedrooms": 2.0,
            "carspaces": 1,
            "suburb": "PYRMONT",
            "postcode": "2009",
            "displayableAddress": "12/34 Harris Street, Pyrmont"
        }
    }
}"#;

pub const PROJECT_JSON: &str = r#"{
    "type": "Project",
    "project": { "id": 3001, "name": "Jackson Landing" },
    "listings": [
        { "id": 11, "propertyDetails": { "state": "NSW", "suburb": "PYRMONT" } },
        { "id": 12, "propertyDetails": { "state": "NSW", "suburb": "PYRMONT" } }
    ]
}"#;
