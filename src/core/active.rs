//! Active-window filtering.
//!
//! An event is active when its [start, end] window contains the given
//! instant, bounds included, and it is not hidden. Events whose stored
//! timestamps no longer parse are treated as inactive rather than as
//! errors; callers that want to report them can probe [`event_window`]
//! themselves.

use chrono::{DateTime, FixedOffset};

use crate::models::event::OpenEvent;
use crate::utils::date::parse_civil;

/// Parse an event's stored window. None when either bound is unreadable.
pub fn event_window(ev: &OpenEvent) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let start = parse_civil(&ev.start)?;
    let end = parse_civil(&ev.end)?;
    Some((start, end))
}

pub fn is_active(ev: &OpenEvent, now: DateTime<FixedOffset>) -> bool {
    if ev.hidden {
        return false;
    }
    match event_window(ev) {
        Some((start, end)) => start <= now && now <= end,
        None => false,
    }
}

/// The active subset of `events`, preserving the input (store) order.
/// Inputs are not mutated.
pub fn active_events(events: &[OpenEvent], now: DateTime<FixedOffset>) -> Vec<OpenEvent> {
    events
        .iter()
        .filter(|ev| is_active(ev, now))
        .cloned()
        .collect()
}
