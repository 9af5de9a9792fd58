use super::utils::{LISTING_JSON, PROJECT_JSON};
use crate::client::models::SearchResult;
use crate::domain::ListingSummary;
use serde_json::json;

#[test]
fn summary_flattens_listing() {
    let result: SearchResult = serde_json::from_str(LISTING_JSON).unwrap();
    let summary = ListingSummary::from_listing(result.listing.as_ref().unwrap()).unwrap();

    assert_eq!(summary.listing_id, 2016123456);
    assert_eq!(summary.suburb, "PYRMONT");
    assert_eq!(summary.state, "NSW");
    assert_eq!(summary.display_price.as_deref(), Some("$950 per week"));
    assert_eq!(
        summary.to_string(),
        "2016123456\tPYRMONT NSW 2009\tApartmentUnitFlat\t2 bed\t$950 per week"
    );
}

#[test]
fn summaries_expand_projects_and_keep_order() {
    let results: Vec<SearchResult> =
        serde_json::from_str(&format!("[{LISTING_JSON}, {PROJECT_JSON}]")).unwrap();

    let lines = ListingSummary::lines(&results);
    let ids: Vec<&str> = lines
        .iter()
        .map(|line| line.split('\t').next().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["2016123456", "11", "12"]);
}

#[test]
fn listing_without_suburb_is_rejected() {
    let result: SearchResult = serde_json::from_value(json!({
        "listing": { "id": 9, "propertyDetails": { "state": "NSW", "suburb": "" } }
    }))
    .unwrap();

    let err = ListingSummary::from_listing(result.listing.as_ref().unwrap()).unwrap_err();
    assert!(err.contains("suburb"), "{err}");
}

#[test]
fn unsummarisable_listing_still_prints_its_id() {
    let results: Vec<SearchResult> = serde_json::from_value(json!([
        { "listing": { "id": 7, "propertyDetails": { "state": "NSW", "suburb": "PYRMONT" } } },
        { "listing": { "id": 8 } },
        { "listing": { "id": 9, "propertyDetails": { "state": "", "suburb": "ULTIMO" } } }
    ]))
    .unwrap();

    let lines = ListingSummary::lines(&results);
    assert_eq!(lines, vec!["7\tPYRMONT NSW", "8", "9"]);
}
