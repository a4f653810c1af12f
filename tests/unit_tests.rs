// Unit tests for Travel Search

use serde_json::{json, Value};
use travel_search::core::{
    filters::matches_query,
    index::merge_candidates,
    navigator::{route_for, Navigator},
    searcher::Searcher,
};
use travel_search::models::{Record, ResourceKind, SearchMode, SearchResult, SourceStatus};
use travel_search::services::{ResourceStore, TravelApiClient};
use std::sync::Arc;
use std::time::Duration;

fn record(value: Value) -> Record {
    Record::try_from(value).expect("test records are objects")
}

fn customer(id: &str, name: &str, email: &str) -> Record {
    record(json!({ "_id": id, "fullName": name, "email": email }))
}

fn hotel(id: &str, name: &str, location: &str) -> Record {
    record(json!({ "_id": id, "hotelName": name, "hotelLocation": location }))
}

fn tour(id: &str, package: &str, pickup: &str) -> Record {
    record(json!({ "_id": id, "selectedPackage": package, "pickupLocation": pickup }))
}

fn flight(id: &str, passenger: &str, email: &str) -> Record {
    record(json!({ "_id": id, "passengerName": passenger, "email": email }))
}

#[test]
fn test_empty_query_yields_no_results() {
    let candidates = merge_candidates(
        &[customer("c1", "Nadia Islam", "nadia@example.com")],
        &[hotel("h1", "Seaside Inn", "Cox's Bazar")],
        &[tour("t1", "family", "Dhaka")],
        &[flight("f1", "Rahim Uddin", "rahim@example.com")],
    );

    for mode in [SearchMode::Dropdown, SearchMode::Full] {
        let outcome = Searcher::default().search("", candidates.clone(), mode);
        assert!(outcome.results.is_empty());
    }
}

#[test]
fn test_query_is_case_insensitive() {
    let candidates = merge_candidates(&[], &[hotel("h1", "Seaside Inn", "Cox's Bazar")], &[], &[]);

    for query in ["cox", "COX", "Cox"] {
        let outcome = Searcher::default().search(query, candidates.clone(), SearchMode::Dropdown);
        assert_eq!(outcome.results.len(), 1, "query {:?} should match", query);
        assert_eq!(outcome.results[0].data.id(), Some("h1"));
    }
}

#[test]
fn test_second_field_alone_matches() {
    let candidate = SearchResult::new(
        ResourceKind::Customer,
        customer("c1", "Nadia Islam", "travel.fan@example.com"),
    );

    assert!(matches_query(&candidate, "travel.fan"));
    assert!(matches_query(&candidate, "nadia"));
    assert!(!matches_query(&candidate, "rahim"));
}

#[test]
fn test_dropdown_returns_first_eight_in_merge_order() {
    let customers: Vec<Record> = (0..5)
        .map(|i| customer(&format!("c{}", i), &format!("Match Customer {}", i), "x@example.com"))
        .collect();
    let hotels: Vec<Record> = (0..5)
        .map(|i| hotel(&format!("h{}", i), &format!("Match Hotel {}", i), "Dhaka"))
        .collect();
    let tours: Vec<Record> = (0..5)
        .map(|i| tour(&format!("t{}", i), "match package", "Sylhet"))
        .collect();
    let flights: Vec<Record> = (0..5)
        .map(|i| flight(&format!("f{}", i), &format!("Match Passenger {}", i), "y@example.com"))
        .collect();

    let candidates = merge_candidates(&customers, &hotels, &tours, &flights);
    let outcome = Searcher::default().search("match", candidates, SearchMode::Dropdown);

    let ids: Vec<&str> = outcome
        .results
        .iter()
        .map(|r| r.data.id().unwrap())
        .collect();

    assert_eq!(outcome.total_matches, 20);
    assert_eq!(ids, vec!["c0", "c1", "c2", "c3", "c4", "h0", "h1", "h2"]);
}

#[test]
fn test_full_page_returns_every_match() {
    let hotels: Vec<Record> = (0..20)
        .map(|i| hotel(&format!("h{}", i), "Grand Hotel", "Dhaka"))
        .collect();

    let candidates = merge_candidates(&[], &hotels, &[], &[]);
    let outcome = Searcher::default().search("grand", candidates, SearchMode::Full);

    assert_eq!(outcome.results.len(), 20);
}

#[test]
fn test_each_kind_routes_to_its_template() {
    let navigator = Navigator::default();
    let cases = [
        (ResourceKind::Customer, customer("abc123", "A", "a@example.com"), "/customers/abc123"),
        (ResourceKind::Hotel, hotel("abc123", "B", "C"), "/hotels/abc123"),
        (ResourceKind::Tour, tour("abc123", "D", "E"), "/tours/abc123"),
        (ResourceKind::Flight, flight("abc123", "F", "f@example.com"), "/flights/abc123"),
    ];

    for (kind, data, expected) in cases {
        let result = SearchResult::new(kind, data);
        assert_eq!(navigator.select(&result).unwrap(), expected);
        assert_eq!(route_for(kind, "abc123"), expected);
    }
}

#[test]
fn test_tour_without_pickup_location() {
    let candidates = merge_candidates(
        &[],
        &[],
        &[record(json!({ "_id": "t1", "selectedPackage": "honeymoon" }))],
        &[],
    );

    let outcome = Searcher::default().search("dhaka", candidates.clone(), SearchMode::Full);
    assert!(outcome.results.is_empty());

    let outcome = Searcher::default().search("honey", candidates, SearchMode::Full);
    assert_eq!(outcome.results.len(), 1);
}

#[test]
fn test_partial_load_returns_only_loaded_kind() {
    let candidates = merge_candidates(
        &[],
        &[hotel("h1", "Seaside Inn", "Cox's Bazar"), hotel("h2", "Hill View", "Sylhet")],
        &[],
        &[],
    );

    let outcome = Searcher::default().search("i", candidates, SearchMode::Full);

    assert_eq!(outcome.results.len(), 2);
    assert!(outcome.results.iter().all(|r| r.kind == ResourceKind::Hotel));
}

#[test]
fn test_end_to_end_scenario() {
    let candidates = merge_candidates(
        &[],
        &[hotel("h1", "Seaside Inn", "Cox's Bazar")],
        &[tour("t1", "family", "Dhaka")],
        &[],
    );

    let outcome = Searcher::default().search("cox", candidates, SearchMode::Dropdown);

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].kind, ResourceKind::Hotel);
    assert_eq!(outcome.results[0].data.id(), Some("h1"));

    let route = Navigator::default().select(&outcome.results[0]).unwrap();
    assert_eq!(route, "/hotels/h1");
}

#[test]
fn test_search_result_serializes_with_type_tag() {
    let result = SearchResult::new(ResourceKind::Hotel, hotel("h1", "Seaside Inn", "Cox's Bazar"));
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["type"], json!("Hotel"));
    assert_eq!(value["data"]["_id"], json!("h1"));
}

#[test]
fn test_store_snapshot_before_refresh() {
    let client = TravelApiClient::new("http://127.0.0.1:9".to_string(), Duration::from_secs(1));
    let store = ResourceStore::new(Arc::new(client));

    let snapshot = tokio_test::block_on(store.snapshot());

    assert!(snapshot.candidates().is_empty());
    assert_eq!(snapshot.reports().len(), 4);
    assert!(snapshot.reports().iter().all(|r| r.status == SourceStatus::Pending));
}
