//! Validated event construction: truncation, clamping, window invariant.

use openspot::core::create::{EventDraft, OpenLogic, clamp_capacity, truncate_title};
use openspot::errors::AppError;
use openspot::utils::clock::FixedClock;

fn draft() -> EventDraft {
    EventDraft {
        title: "걷기 모임".to_string(),
        start: "2024-05-01 09:00".to_string(),
        end: "2024-05-01 11:30".to_string(),
        address: "경북 포항시 남구".to_string(),
        address_detail: Some("정문 앞".to_string()),
        lat: 36.019,
        lng: 129.343,
        capacity: None,
        photo: String::new(),
    }
}

fn clock() -> FixedClock {
    FixedClock::from_ymd_hm(2024, 5, 1, 8, 0)
}

#[test]
fn build_assigns_id_and_created_at() {
    let ev = OpenLogic::build(draft(), &clock()).unwrap();

    assert!(!ev.id.is_empty());
    assert!(!ev.created_at.is_empty());
    assert!(ev.created_at.starts_with("2024-05-01T08:00:00"));
    assert!(!ev.hidden);
}

#[test]
fn window_bounds_are_canonicalized() {
    let mut d = draft();
    d.start = "2024-05-01T09:00:00".to_string();
    d.end = "20240502".to_string();

    let ev = OpenLogic::build(d, &clock()).unwrap();
    assert_eq!(ev.start, "2024-05-01 09:00");
    assert_eq!(ev.end, "2024-05-02 00:00");
}

#[test]
fn long_titles_are_cut_once_with_an_ellipsis() {
    let long = "가나다라마바사아자차카타파하".repeat(3); // 42 chars
    let cut = truncate_title(&long);

    assert_eq!(cut.chars().count(), 31);
    assert!(cut.ends_with('…'));

    // Short titles pass through untouched.
    assert_eq!(truncate_title("  걷기  "), "걷기");
}

#[test]
fn capacity_is_clamped_into_range() {
    assert_eq!(clamp_capacity(0), 1);
    assert_eq!(clamp_capacity(-5), 1);
    assert_eq!(clamp_capacity(7), 7);
    assert_eq!(clamp_capacity(99), 10);

    let mut d = draft();
    d.capacity = Some(42);
    let ev = OpenLogic::build(d, &clock()).unwrap();
    assert!(ev.capacity_enabled);
    assert_eq!(ev.capacity_max, Some(10));

    let ev = OpenLogic::build(draft(), &clock()).unwrap();
    assert!(!ev.capacity_enabled);
    assert_eq!(ev.capacity_max, None);
}

#[test]
fn end_must_be_after_start() {
    let mut d = draft();
    d.end = d.start.clone();
    assert!(matches!(
        OpenLogic::build(d, &clock()),
        Err(AppError::Validation(_))
    ));

    let mut d = draft();
    d.end = "2024-05-01 08:00".to_string();
    assert!(matches!(
        OpenLogic::build(d, &clock()),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn missing_title_or_address_is_rejected() {
    let mut d = draft();
    d.title = "   ".to_string();
    assert!(matches!(
        OpenLogic::build(d, &clock()),
        Err(AppError::Validation(_))
    ));

    let mut d = draft();
    d.address = String::new();
    assert!(matches!(
        OpenLogic::build(d, &clock()),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn unparsable_window_is_a_creation_error_not_a_silent_skip() {
    let mut d = draft();
    d.start = "tomorrow-ish".to_string();
    assert!(matches!(
        OpenLogic::build(d, &clock()),
        Err(AppError::InvalidTimestamp(_))
    ));
}
