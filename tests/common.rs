#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn osp() -> Command {
    cargo_bin_cmd!("openspot")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_openspot.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema for a test DB (no config file written)
pub fn init_test_db(db_path: &str) {
    osp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Open an event through the CLI with fixed place fields
pub fn open_event(db_path: &str, title: &str, start: &str, end: &str) {
    osp()
        .args([
            "--db",
            db_path,
            "open",
            title,
            "--start",
            start,
            "--end",
            end,
            "--addr",
            "경북 포항시 남구 지곡로",
            "--lat",
            "36.019",
            "--lng",
            "129.343",
        ])
        .assert()
        .success();
}

/// A window that is always active for tests using the real clock
pub const FAR_PAST: &str = "2000-01-01 00:00";
pub const FAR_FUTURE: &str = "2099-12-31 23:59";
