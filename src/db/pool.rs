//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! Each command opens its own short-lived connection; rusqlite autocommit
//! makes every mutating call durable before it returns.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
