//! Place candidate normalization and search-client short-circuits.

use openspot::errors::AppError;
use openspot::models::place::RawPlace;
use openspot::places::client::PlaceClient;
use openspot::places::normalize::normalize_places;

fn raw(name: &str, road: Option<&str>, addr: Option<&str>, x: Option<&str>, y: Option<&str>) -> RawPlace {
    RawPlace {
        place_name: name.to_string(),
        road_address_name: road.map(str::to_string),
        address_name: addr.map(str::to_string),
        x: x.map(str::to_string),
        y: y.map(str::to_string),
    }
}

#[test]
fn malformed_records_are_dropped_order_preserved() {
    let batch = vec![
        raw("효자시장", Some("포항시 남구 효자동길"), None, Some("129.34"), Some("36.01")),
        raw("missing-coords", None, None, None, None),
        raw("영일대", None, Some("포항시 북구"), Some("129.36"), Some("36.05")),
    ];

    let out = normalize_places(batch);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "효자시장");
    assert_eq!(out[1].name, "영일대");
}

#[test]
fn non_numeric_coordinates_drop_the_record() {
    let batch = vec![raw("bad", None, None, Some("east-ish"), Some("36.0"))];
    assert!(normalize_places(batch).is_empty());
}

#[test]
fn empty_name_drops_the_record() {
    let batch = vec![raw("  ", None, None, Some("129.0"), Some("36.0"))];
    assert!(normalize_places(batch).is_empty());
}

#[test]
fn label_prefers_road_address() {
    let out = normalize_places(vec![raw(
        "효자시장",
        Some("효자동길 25"),
        Some("효자동 123-4"),
        Some("129.34"),
        Some("36.01"),
    )]);
    assert_eq!(out[0].label, "효자시장 — 효자동길 25");
}

#[test]
fn label_falls_back_to_general_address_then_name() {
    let general = normalize_places(vec![raw(
        "효자시장",
        None,
        Some("효자동 123-4"),
        Some("129.34"),
        Some("36.01"),
    )]);
    assert_eq!(general[0].label, "효자시장 — 효자동 123-4");

    let bare = normalize_places(vec![raw("효자시장", None, None, Some("129.34"), Some("36.01"))]);
    assert_eq!(bare[0].label, "효자시장");
}

#[test]
fn coordinates_map_x_to_lng_and_y_to_lat() {
    let out = normalize_places(vec![raw("p", None, None, Some("129.34"), Some("36.01"))]);
    assert_eq!(out[0].lng, 129.34);
    assert_eq!(out[0].lat, 36.01);
}

#[test]
fn blank_query_short_circuits_before_any_call() {
    let client = PlaceClient::new("http://127.0.0.1:1".to_string(), "key".to_string(), 1);
    match client.fetch_raw("   ", 5) {
        Err(AppError::EmptyQuery) => {}
        other => panic!("expected EmptyQuery, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_credential_short_circuits_before_any_call() {
    let client = PlaceClient::new("http://127.0.0.1:1".to_string(), String::new(), 1);
    match client.fetch_raw("효자시장", 5) {
        Err(AppError::ConfigMissing(_)) => {}
        other => panic!("expected ConfigMissing, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn unreachable_upstream_is_a_transport_error() {
    // Nothing listens on this port; the failure must carry a cause, not panic.
    let client = PlaceClient::new(
        "http://127.0.0.1:9/doesnotexist".to_string(),
        "key".to_string(),
        1,
    );
    match client.search("효자시장", 5) {
        Err(AppError::Transport(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected Transport, got {:?}", other.map(|_| ())),
    }
}
