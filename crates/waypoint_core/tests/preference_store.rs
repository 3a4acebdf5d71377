use waypoint_core::db::{open_db, open_db_in_memory};
use waypoint_core::{
    PreferenceRepository, PreferenceStore, RepoResult, SqlitePreferenceRepository,
};

#[test]
fn never_set_flag_defaults_to_false() {
    let conn = open_db_in_memory().unwrap();
    let store = PreferenceStore::new(SqlitePreferenceRepository::new(&conn));

    assert!(!store.dark_mode());
}

#[test]
fn set_dark_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.db");

    {
        let conn = open_db(&path).unwrap();
        let store = PreferenceStore::new(SqlitePreferenceRepository::new(&conn));
        store.set_dark_mode(true);
    }

    // Fresh connection over the same file simulates a process restart.
    let conn = open_db(&path).unwrap();
    let store = PreferenceStore::new(SqlitePreferenceRepository::new(&conn));
    assert!(store.dark_mode());
}

#[test]
fn toggle_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let store = PreferenceStore::new(SqlitePreferenceRepository::new(&conn));

    store.set_dark_mode(true);
    assert!(store.dark_mode());
    store.set_dark_mode(false);
    assert!(!store.dark_mode());

    // Overwrite, not append: exactly one row regardless of toggle count.
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM preferences;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn value_is_stored_as_json_boolean() {
    let conn = open_db_in_memory().unwrap();
    let store = PreferenceStore::new(SqlitePreferenceRepository::new(&conn));

    store.set_dark_mode(true);
    let raw: String = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = 'darkMode';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw, "true");
}

#[test]
fn malformed_stored_value_degrades_to_default() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO preferences (key, value) VALUES ('darkMode', 'not-a-bool');",
        [],
    )
    .unwrap();

    let store = PreferenceStore::new(SqlitePreferenceRepository::new(&conn));
    assert!(!store.dark_mode());
}

#[test]
fn read_failure_degrades_to_default_and_write_failure_is_swallowed() {
    let store = PreferenceStore::new(FailingRepository);

    assert!(!store.dark_mode());
    // Must not panic or surface anything.
    store.set_dark_mode(true);
}

#[test]
fn raw_repository_round_trips_values() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);

    assert_eq!(repo.read_value("darkMode").unwrap(), None);
    repo.write_value("darkMode", "false").unwrap();
    assert_eq!(
        repo.read_value("darkMode").unwrap().as_deref(),
        Some("false")
    );
}

/// Repository double whose every operation fails with a storage error.
struct FailingRepository;

impl PreferenceRepository for FailingRepository {
    fn read_value(&self, _key: &str) -> RepoResult<Option<String>> {
        Err(waypoint_core::RepoError::InvalidData(
            "injected read failure".to_string(),
        ))
    }

    fn write_value(&self, _key: &str, _value: &str) -> RepoResult<()> {
        Err(waypoint_core::RepoError::InvalidData(
            "injected write failure".to_string(),
        ))
    }
}
