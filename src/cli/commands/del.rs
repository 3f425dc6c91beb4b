use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::events::delete_event_by_id;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!(
                "Delete event {}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        // Deleting an unknown id is a no-op, not an error.
        if delete_event_by_id(&mut pool, id)? {
            if let Err(e) = ttlog(&pool.conn, "del", id, "Event deleted") {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
            success(format!("Event {} has been deleted.", id));
        } else {
            info(format!("No event with id {}, nothing to delete.", id));
        }
    }

    Ok(())
}
