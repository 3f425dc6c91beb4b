//! Civil-timestamp parsing and formatting.
//!
//! Stored timestamps are text. The canonical form written today is
//! `YYYY-MM-DD HH:MM`, but the parser keeps accepting every form that has
//! ever been written: ISO 8601 with an offset (converted to KST), the `T`
//! and space separated naive forms with optional seconds, and bare dates.
//! Offset-less input is interpreted as KST.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::utils::clock::kst;

pub const CIVIL_FORMAT: &str = "%Y-%m-%d %H:%M";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parse a civil timestamp into a KST instant.
/// Returns None for anything unrecognized; callers decide whether that is
/// a validation error (creation path) or a silent exclusion (read path).
pub fn parse_civil(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Offset-carrying forms first; a trailing 'Z' means UTC.
    let iso = s.replace('Z', "+00:00");
    if let Ok(dt) = DateTime::parse_from_rfc3339(&iso) {
        return Some(dt.with_timezone(&kst()));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive.and_local_timezone(kst()).single();
        }
    }

    // Bare dates count as midnight.
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d
                .and_hms_opt(0, 0, 0)
                .and_then(|ndt| ndt.and_local_timezone(kst()).single());
        }
    }

    None
}

/// Render an instant in the canonical stored form.
pub fn fmt_civil(dt: &DateTime<FixedOffset>) -> String {
    dt.format(CIVIL_FORMAT).to_string()
}
