//! Active-window filter behavior against a pinned clock.

use openspot::core::active::{active_events, is_active};
use openspot::models::event::OpenEvent;
use openspot::utils::clock::{Clock, FixedClock};

fn event(id: &str, start: &str, end: &str) -> OpenEvent {
    OpenEvent {
        id: id.to_string(),
        title: "걷기 모임".to_string(),
        photo: String::new(),
        start: start.to_string(),
        end: end.to_string(),
        address: "경북 포항시 남구".to_string(),
        address_detail: String::new(),
        lat: 36.019,
        lng: 129.343,
        capacity_enabled: false,
        capacity_max: None,
        hidden: false,
        created_at: "2024-05-01T08:00:00+09:00".to_string(),
    }
}

fn noon() -> chrono::DateTime<chrono::FixedOffset> {
    FixedClock::from_ymd_hm(2024, 5, 1, 12, 0).now()
}

#[test]
fn window_containing_now_is_active() {
    let ev = event("a", "2024-05-01 09:00", "2024-05-01 18:00");
    assert!(is_active(&ev, noon()));
}

#[test]
fn window_entirely_before_now_is_inactive() {
    let ev = event("a", "2024-05-01 08:00", "2024-05-01 09:00");
    assert!(!is_active(&ev, noon()));
}

#[test]
fn window_entirely_after_now_is_inactive() {
    let ev = event("a", "2024-05-01 13:00", "2024-05-01 18:00");
    assert!(!is_active(&ev, noon()));
}

#[test]
fn bounds_are_inclusive_on_both_ends() {
    // start == now
    let ev = event("a", "2024-05-01 12:00", "2024-05-01 18:00");
    assert!(is_active(&ev, noon()));

    // end == now
    let ev = event("b", "2024-05-01 09:00", "2024-05-01 12:00");
    assert!(is_active(&ev, noon()));
}

#[test]
fn degenerate_equal_bounds_match_only_that_instant() {
    let ev = event("a", "2024-05-01 12:00", "2024-05-01 12:00");
    assert!(is_active(&ev, noon()));

    let later = FixedClock::from_ymd_hm(2024, 5, 1, 12, 1).now();
    assert!(!is_active(&ev, later));
}

#[test]
fn hidden_events_are_excluded() {
    let mut ev = event("a", "2024-05-01 09:00", "2024-05-01 18:00");
    ev.hidden = true;
    assert!(!is_active(&ev, noon()));
}

#[test]
fn unparsable_window_is_silently_excluded() {
    let broken_start = event("a", "not-a-date", "2024-05-01 18:00");
    let broken_end = event("b", "2024-05-01 09:00", "soon");
    let ok = event("c", "2024-05-01 09:00", "2024-05-01 18:00");

    let out = active_events(&[broken_start, broken_end, ok], noon());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "c");
}

#[test]
fn filter_preserves_store_ordering() {
    let events = vec![
        event("newest", "2024-05-01 09:00", "2024-05-01 18:00"),
        event("middle", "2024-05-01 13:00", "2024-05-01 18:00"), // not yet open
        event("oldest", "2024-05-01 09:00", "2024-05-01 13:00"),
    ];

    let out = active_events(&events, noon());
    let ids: Vec<&str> = out.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["newest", "oldest"]);
}

#[test]
fn offset_carrying_timestamps_are_understood() {
    // 03:00 UTC is 12:00 KST
    let ev = event("a", "2024-05-01T00:00:00Z", "2024-05-01T03:00:00Z");
    assert!(is_active(&ev, noon()));
}
