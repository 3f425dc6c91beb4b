use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) EVENT COUNTS
    //
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let hidden: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events WHERE hidden = 1", [], |row| {
            row.get(0)
        })?;
    println!(
        "{}• Events:{} {}{}{} {}({} hidden){}",
        CYAN, RESET, GREEN, events, RESET, GREY, hidden, RESET
    );

    //
    // 3) FAVORITES
    //
    let favs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM favs", [], |row| row.get(0))?;
    println!("{}• Favorites:{} {}{}{}", CYAN, RESET, GREEN, favs, RESET);

    //
    // 4) CREATION RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM events ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM events ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match (first, last) {
        (Some(f), Some(l)) => {
            println!("{}• First created:{} {}", CYAN, RESET, f);
            println!("{}• Last created:{}  {}", CYAN, RESET, l);
        }
        _ => println!("{}• No events yet{}", GREY, RESET),
    }

    println!();
    Ok(())
}
