use beenote_core::storage::migrations::latest_version;
use beenote_core::{open_kv, open_kv_in_memory, KvStore, SqliteKvStore};
use tempfile::TempDir;

#[test]
fn open_applies_migrations_and_creates_kv_table() {
    let conn = open_kv_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("beenote.sqlite3");

    {
        let conn = open_kv(&path).unwrap();
        SqliteKvStore::new(&conn).set("k", "v").unwrap();
    }

    let conn = open_kv(&path).unwrap();
    assert_eq!(
        SqliteKvStore::new(&conn).get("k").unwrap().as_deref(),
        Some("v")
    );
}

#[test]
fn reopen_with_newer_schema_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("beenote.sqlite3");
    {
        let conn = open_kv(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    }

    let err = open_kv(&path).unwrap_err();
    assert!(err.to_string().contains("newer than supported"));
}
