use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::favorite::Favorite;
use rusqlite::{Connection, params};

/// Remember an activity name. Input is trimmed; blank input is silently
/// ignored. Re-adding an existing activity is a no-op and does not touch
/// its original position. Returns whether a new row was written.
pub fn add_favorite(conn: &Connection, activity: &str, now: &str) -> AppResult<bool> {
    let name = activity.trim();
    if name.is_empty() {
        return Ok(false);
    }

    let n = conn.execute(
        "INSERT OR IGNORE INTO favs (activity, created_at) VALUES (?1, ?2)",
        params![name, now],
    )?;
    Ok(n > 0)
}

/// Exact-match delete; absent activity is a no-op.
pub fn remove_favorite(pool: &mut DbPool, activity: &str) -> AppResult<bool> {
    let n = pool
        .conn
        .execute("DELETE FROM favs WHERE activity = ?1", [activity])?;
    Ok(n > 0)
}

/// All favorites, most recently remembered first.
pub fn load_favorites(pool: &mut DbPool) -> AppResult<Vec<Favorite>> {
    let mut stmt = pool.conn.prepare(
        "SELECT activity, created_at FROM favs
         ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Favorite {
            activity: row.get(0)?,
            created_at: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
