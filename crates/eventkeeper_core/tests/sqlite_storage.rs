use eventkeeper_core::db::migrations::latest_version;
use eventkeeper_core::db::{open_db, open_db_in_memory, DbError};
use eventkeeper_core::{
    EventManager, EventStore, MemorySurface, PersistenceAdapter, SqliteStorage, StorageError,
    EVENTS_STORAGE_KEY,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eventkeeper.sqlite3");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();

    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn newer_schema_error_names_both_versions() {
    let err = DbError::UnsupportedSchemaVersion {
        db_version: 7,
        latest_supported: latest_version(),
    };
    assert_eq!(
        err.to_string(),
        format!(
            "key-value container is at version 7; this build reads up to {}",
            latest_version()
        )
    );
}

#[test]
fn failed_migration_reports_version_and_rolls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clash.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE other (x INTEGER);
         CREATE INDEX kv_entries ON other (x);",
    )
    .unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::Migration { version, .. } => assert_eq!(version, 1),
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn storage_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteStorage::try_new(&conn) {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn read_missing_key_is_none_and_write_overwrites() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();

    assert_eq!(storage.read(EVENTS_STORAGE_KEY).unwrap(), None);

    storage.write(EVENTS_STORAGE_KEY, b"[]").unwrap();
    storage.write(EVENTS_STORAGE_KEY, b"[1]").unwrap();

    assert_eq!(
        storage.read(EVENTS_STORAGE_KEY).unwrap(),
        Some(b"[1]".to_vec())
    );
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn events_survive_reopening_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eventkeeper.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut page =
            EventManager::start(SqliteStorage::try_new(&conn).unwrap(), MemorySurface::new());
        page.surface_mut()
            .fill("Persistent Event", "2026-11-01", "Reload test");
        assert!(page.submit_form().is_accepted());
    }

    let conn = open_db(&path).unwrap();
    let page = EventManager::start(SqliteStorage::try_new(&conn).unwrap(), MemorySurface::new());
    assert!(page.surface().shows_title("Persistent Event"));

    let store = EventStore::open(SqliteStorage::try_new(&conn).unwrap());
    let titles: Vec<_> = store.current_list().iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Persistent Event"]);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
