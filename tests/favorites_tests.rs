//! Favorites store contract: trim, insert-if-absent, recency ordering.

use openspot::db::favorites::{add_favorite, load_favorites, remove_favorite};
use openspot::db::initialize::init_db;
use openspot::db::pool::DbPool;

use std::env;
use std::fs;
use std::path::PathBuf;

fn setup_pool(name: &str) -> DbPool {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_openspot_favs.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init schema");
    pool
}

#[test]
fn adding_twice_keeps_exactly_one_entry() {
    let mut pool = setup_pool("add_twice");

    assert!(add_favorite(&pool.conn, "걷기", "2024-05-01T09:00:00+09:00").unwrap());
    assert!(!add_favorite(&pool.conn, "걷기", "2024-05-02T09:00:00+09:00").unwrap());

    let favs = load_favorites(&mut pool).unwrap();
    assert_eq!(favs.len(), 1);
    assert_eq!(favs[0].activity, "걷기");
    // Re-adding did not move it forward in time.
    assert_eq!(favs[0].created_at, "2024-05-01T09:00:00+09:00");
}

#[test]
fn blank_input_changes_nothing() {
    let mut pool = setup_pool("blank");

    assert!(!add_favorite(&pool.conn, "  ", "2024-05-01T09:00:00+09:00").unwrap());
    assert!(load_favorites(&mut pool).unwrap().is_empty());
}

#[test]
fn input_is_trimmed_before_keying() {
    let mut pool = setup_pool("trimmed");

    assert!(add_favorite(&pool.conn, "  요가  ", "2024-05-01T09:00:00+09:00").unwrap());
    assert!(!add_favorite(&pool.conn, "요가", "2024-05-02T09:00:00+09:00").unwrap());

    let favs = load_favorites(&mut pool).unwrap();
    assert_eq!(favs.len(), 1);
    assert_eq!(favs[0].activity, "요가");
}

#[test]
fn listing_is_most_recent_first() {
    let mut pool = setup_pool("recency");

    add_favorite(&pool.conn, "걷기", "2024-05-01T09:00:00+09:00").unwrap();
    add_favorite(&pool.conn, "요가", "2024-05-02T09:00:00+09:00").unwrap();
    add_favorite(&pool.conn, "독서", "2024-05-03T09:00:00+09:00").unwrap();

    let names: Vec<String> = load_favorites(&mut pool)
        .unwrap()
        .into_iter()
        .map(|f| f.activity)
        .collect();
    assert_eq!(names, vec!["독서", "요가", "걷기"]);
}

#[test]
fn remove_is_exact_match_and_idempotent() {
    let mut pool = setup_pool("remove");

    add_favorite(&pool.conn, "걷기", "2024-05-01T09:00:00+09:00").unwrap();

    assert!(remove_favorite(&mut pool, "걷기").unwrap());
    assert!(!remove_favorite(&mut pool, "걷기").unwrap());
    assert!(!remove_favorite(&mut pool, "없는것").unwrap());
    assert!(load_favorites(&mut pool).unwrap().is_empty());
}
