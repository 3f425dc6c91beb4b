use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `events` table exists.
fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `events` table has a `hidden` column.
fn events_has_hidden_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "hidden" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `events` table with the modern schema (including `hidden`).
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id               TEXT PRIMARY KEY,
            title            TEXT NOT NULL,
            photo            TEXT NOT NULL DEFAULT '',
            start            TEXT NOT NULL,
            "end"            TEXT NOT NULL,
            address          TEXT NOT NULL,
            address_detail   TEXT NOT NULL DEFAULT '',
            lat              REAL NOT NULL,
            lng              REAL NOT NULL,
            capacity_enabled INTEGER NOT NULL DEFAULT 0,
            capacity_max     INTEGER,
            hidden           INTEGER NOT NULL DEFAULT 0,
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_created_at ON events(created_at);
        "#,
    )?;
    Ok(())
}

fn create_favs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS favs (
            activity   TEXT PRIMARY KEY,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Add the `hidden` soft-delete flag to an events table written before it
/// existed. Recorded in the log table so it runs once.
fn migrate_add_hidden_column(conn: &Connection) -> Result<()> {
    let version = "20250704_0001_add_hidden_flag";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE events ADD COLUMN hidden INTEGER NOT NULL DEFAULT 0;",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'hidden' column: {}", e)),
        )
    })?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added hidden flag to events')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'hidden' to events table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Log table first: migrations record themselves into it
    ensure_log_table(conn)?;

    // 2) Events table
    if !events_table_exists(conn)? {
        create_events_table(conn)?;
    } else if !events_has_hidden_column(conn)? {
        migrate_add_hidden_column(conn)?;
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_events_created_at ON events(created_at);",
        )?;
    }

    // 3) Favorites
    create_favs_table(conn)?;

    Ok(())
}
