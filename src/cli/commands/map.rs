use crate::config::Config;
use crate::core::active::active_events;
use crate::core::map::{MapCenter, build_payload};
use crate::db::events::load_all_events;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::clock::{Clock, SystemClock};

/// Print the map payload (marker points + centroid) for the external
/// renderer. Always valid JSON, even with nothing to show.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let events = load_all_events(&mut pool)?;
    let active = active_events(&events, SystemClock.now());

    let payload = build_payload(
        &active,
        MapCenter {
            lat: cfg.center_lat,
            lng: cfg.center_lng,
        },
    );

    let body =
        serde_json::to_string_pretty(&payload).map_err(|e| AppError::Other(e.to_string()))?;
    println!("{}", body);

    Ok(())
}
