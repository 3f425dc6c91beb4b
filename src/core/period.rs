//! Human-readable rendering of an event's time window.

use crate::utils::date::parse_civil;

/// Shown when either bound of a stored window cannot be parsed.
/// Formatting is display-only, so it never fails.
pub const PERIOD_PLACEHOLDER: &str = "-";

/// Compact period string: `MM/DD HH:MM–HH:MM` when both bounds fall on
/// the same calendar date, `MM/DD HH:MM–MM/DD HH:MM` otherwise.
pub fn format_period(start: &str, end: &str) -> String {
    let (Some(s), Some(e)) = (parse_civil(start), parse_civil(end)) else {
        return PERIOD_PLACEHOLDER.to_string();
    };

    if s.date_naive() == e.date_naive() {
        format!("{}–{}", s.format("%m/%d %H:%M"), e.format("%H:%M"))
    } else {
        format!("{}–{}", s.format("%m/%d %H:%M"), e.format("%m/%d %H:%M"))
    }
}
