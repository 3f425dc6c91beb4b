use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::OpenEvent;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<OpenEvent> {
    Ok(OpenEvent {
        id: row.get("id")?,
        title: row.get("title")?,
        photo: row.get("photo")?,
        start: row.get("start")?,
        end: row.get("end")?,
        address: row.get("address")?,
        address_detail: row.get("address_detail")?,
        lat: row.get("lat")?,
        lng: row.get("lng")?,
        capacity_enabled: row.get::<_, i32>("capacity_enabled")? == 1,
        capacity_max: row.get("capacity_max")?,
        hidden: row.get::<_, i32>("hidden")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Insert a fully validated event. The caller is responsible for the
/// construction invariants; the store only persists.
pub fn insert_event(conn: &Connection, ev: &OpenEvent) -> AppResult<()> {
    conn.execute(
        r#"INSERT INTO events
           (id, title, photo, start, "end", address, address_detail,
            lat, lng, capacity_enabled, capacity_max, hidden, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"#,
        params![
            ev.id,
            ev.title,
            ev.photo,
            ev.start,
            ev.end,
            ev.address,
            ev.address_detail,
            ev.lat,
            ev.lng,
            if ev.capacity_enabled { 1 } else { 0 },
            ev.capacity_max,
            if ev.hidden { 1 } else { 0 },
            ev.created_at,
        ],
    )?;
    Ok(())
}

/// All events, newest creation first. An empty list is a valid result.
/// rowid breaks ties for rows created within the same clock reading.
pub fn load_all_events(pool: &mut DbPool) -> AppResult<Vec<OpenEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Hard delete. Deleting an id that is not present is a no-op, not an
/// error; returns whether a row was actually removed.
pub fn delete_event_by_id(pool: &mut DbPool, id: &str) -> AppResult<bool> {
    let n = pool
        .conn
        .execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(n > 0)
}
