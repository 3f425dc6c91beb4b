use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::create::{EventDraft, OpenLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::clock::SystemClock;
use crate::utils::photo::encode_photo;

/// Open a space for a time window.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open {
        title,
        start,
        end,
        address,
        detail,
        lat,
        lng,
        photo,
        capacity,
    } = cmd
    {
        //
        // 1. Encode the photo, if any. A failed read is not an error:
        //    the event is created without a photo.
        //
        let photo_blob = photo
            .as_ref()
            .map(|p| encode_photo(Path::new(p)))
            .unwrap_or_default();

        //
        // 2. Assemble the draft; validation happens in OpenLogic::build.
        //
        let draft = EventDraft {
            title: title.clone(),
            start: start.clone(),
            end: end.clone(),
            address: address.clone(),
            address_detail: detail.clone(),
            lat: *lat,
            lng: *lng,
            capacity: *capacity,
            photo: photo_blob,
        };

        //
        // 3. Open DB and execute
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let ev = OpenLogic::apply(&mut pool, draft, &SystemClock)?;

        info(format!("Event id: {}", ev.id));
    }

    Ok(())
}
