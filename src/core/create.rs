use uuid::Uuid;

use crate::db::favorites::add_favorite;
use crate::db::events::insert_event;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::OpenEvent;
use crate::ui::messages::success;
use crate::utils::clock::Clock;
use crate::utils::date::{fmt_civil, parse_civil};

/// Longest stored title, in characters. Longer input is cut and marked
/// with an ellipsis at creation time; the original text is not kept.
pub const TITLE_MAX_CHARS: usize = 30;

pub const CAPACITY_MIN: i32 = 1;
pub const CAPACITY_MAX: i32 = 10;

/// Raw creation input, before validation.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub start: String,
    pub end: String,
    pub address: String,
    pub address_detail: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub capacity: Option<i32>,
    /// Already-encoded photo blob; empty means no photo.
    pub photo: String,
}

pub fn truncate_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() <= TITLE_MAX_CHARS {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(TITLE_MAX_CHARS).collect();
    cut.push('…');
    cut
}

pub fn clamp_capacity(n: i32) -> i32 {
    n.clamp(CAPACITY_MIN, CAPACITY_MAX)
}

/// High-level business logic for the `open` command.
pub struct OpenLogic;

impl OpenLogic {
    /// Validated construction. Enforces the creation invariants: title and
    /// address present, both window bounds parseable, `end > start`,
    /// finite coordinates, capacity clamped into [1, 10].
    pub fn build(draft: EventDraft, clock: &dyn Clock) -> AppResult<OpenEvent> {
        if draft.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }
        if draft.address.trim().is_empty() {
            return Err(AppError::Validation("address is required".into()));
        }
        if !draft.lat.is_finite() || !draft.lng.is_finite() {
            return Err(AppError::Validation("coordinates are required".into()));
        }

        let start = parse_civil(&draft.start)
            .ok_or_else(|| AppError::InvalidTimestamp(draft.start.clone()))?;
        let end = parse_civil(&draft.end)
            .ok_or_else(|| AppError::InvalidTimestamp(draft.end.clone()))?;

        if end <= start {
            return Err(AppError::Validation(
                "end must be after start".into(),
            ));
        }

        let (capacity_enabled, capacity_max) = match draft.capacity {
            Some(n) => (true, Some(clamp_capacity(n))),
            None => (false, None),
        };

        Ok(OpenEvent {
            id: Uuid::new_v4().simple().to_string(),
            title: truncate_title(&draft.title),
            photo: draft.photo,
            start: fmt_civil(&start),
            end: fmt_civil(&end),
            address: draft.address.trim().to_string(),
            address_detail: draft
                .address_detail
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            lat: draft.lat,
            lng: draft.lng,
            capacity_enabled,
            capacity_max,
            hidden: false,
            created_at: clock.now().to_rfc3339(),
        })
    }

    /// Build, persist, remember the activity name, write the audit row.
    pub fn apply(pool: &mut DbPool, draft: EventDraft, clock: &dyn Clock) -> AppResult<OpenEvent> {
        let ev = Self::build(draft, clock)?;

        insert_event(&pool.conn, &ev)?;
        add_favorite(&pool.conn, &ev.title, &ev.created_at)?;

        if let Err(e) = ttlog(&pool.conn, "open", &ev.id, &ev.title) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Opened '{}' ({} → {})", ev.title, ev.start, ev.end));
        Ok(ev)
    }
}
