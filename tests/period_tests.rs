//! Period formatter output shapes.

use openspot::core::period::{PERIOD_PLACEHOLDER, format_period};

#[test]
fn same_day_collapses_to_one_date() {
    assert_eq!(
        format_period("2024-05-01 09:00", "2024-05-01 11:30"),
        "05/01 09:00–11:30"
    );
}

#[test]
fn cross_day_shows_both_dates() {
    assert_eq!(
        format_period("2024-05-01 23:00", "2024-05-02 01:00"),
        "05/01 23:00–05/02 01:00"
    );
}

#[test]
fn iso_t_separator_is_accepted() {
    assert_eq!(
        format_period("2024-05-01T09:00", "2024-05-01T11:30:00"),
        "05/01 09:00–11:30"
    );
}

#[test]
fn unparsable_input_yields_placeholder() {
    assert_eq!(format_period("garbage", "2024-05-01 11:30"), PERIOD_PLACEHOLDER);
    assert_eq!(format_period("2024-05-01 09:00", ""), PERIOD_PLACEHOLDER);
    assert_eq!(format_period("", ""), PERIOD_PLACEHOLDER);
}

#[test]
fn bare_dates_format_as_midnight() {
    assert_eq!(
        format_period("2024-05-01", "2024-05-02"),
        "05/01 00:00–05/02 00:00"
    );
}
