use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::active::{active_events, event_window, is_active};
use crate::core::period::format_period;
use crate::db::events::load_all_events;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::OpenEvent;
use crate::ui::messages::info;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all, json } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_all_events(&mut pool)?;
        let now = SystemClock.now();

        // Rows with an unreadable window never surface as errors, but
        // they should not vanish without a trace either.
        for ev in &events {
            if event_window(ev).is_none() {
                let _ = ttlog(
                    &pool.conn,
                    "warn",
                    &ev.id,
                    "unparsable time window, excluded from active listing",
                );
            }
        }

        let shown: Vec<OpenEvent> = if *all {
            events
        } else {
            active_events(&events, now)
        };

        if *json {
            let body = serde_json::to_string_pretty(&shown)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", body);
            return Ok(());
        }

        if shown.is_empty() {
            info(if *all {
                "No events stored."
            } else {
                "No open spaces right now."
            });
            return Ok(());
        }

        let mut columns = vec![
            Column {
                header: "ID".into(),
                min_width: 8,
            },
            Column {
                header: "TITLE".into(),
                min_width: 10,
            },
            Column {
                header: "PERIOD".into(),
                min_width: 12,
            },
            Column {
                header: "ADDRESS".into(),
                min_width: 10,
            },
            Column {
                header: "CAP".into(),
                min_width: 3,
            },
        ];
        if *all {
            columns.push(Column {
                header: "STATE".into(),
                min_width: 6,
            });
        }

        let mut table = Table::new(columns);
        for ev in &shown {
            let cap = match (ev.capacity_enabled, ev.capacity_max) {
                (true, Some(n)) => n.to_string(),
                _ => "-".to_string(),
            };
            let mut row = vec![
                ev.id.clone(),
                ev.title.clone(),
                format_period(&ev.start, &ev.end),
                ev.address.clone(),
                cap,
            ];
            if *all {
                row.push(state_of(ev, now));
            }
            table.add_row(row);
        }

        print!("{}", table.render());
    }

    Ok(())
}

fn state_of(ev: &OpenEvent, now: chrono::DateTime<chrono::FixedOffset>) -> String {
    if ev.hidden {
        "hidden".to_string()
    } else if is_active(ev, now) {
        "open".to_string()
    } else if event_window(ev).is_none() {
        "broken".to_string()
    } else {
        "closed".to_string()
    }
}
