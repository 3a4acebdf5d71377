use waypoint_core::db::open_db_in_memory;
use waypoint_core::{
    Coordinates, LedgerError, LocationLedger, LocationPoint, LocationRepository, PositionError,
    RepoError, RepoResult, ReportedProvider, SqliteLocationRepository,
};

#[test]
fn capture_scenario_assigns_sequential_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));

    let mut first_provider = ReportedProvider::granted(Coordinates::new(37.7749, -122.4194));
    let first = ledger.capture(&mut first_provider).unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.latitude, 37.7749);
    assert_eq!(first.longitude, -122.4194);

    let mut second_provider = ReportedProvider::granted(Coordinates::new(40.7128, -74.0060));
    let second = ledger.capture(&mut second_provider).unwrap();
    assert_eq!(second.id, 2);

    assert_eq!(ledger.points(), &[first, second]);
}

#[test]
fn successful_capture_appends_to_cache_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));
    ledger.reload().unwrap();
    assert!(ledger.points().is_empty());

    let mut provider = ReportedProvider::granted(Coordinates::new(51.5074, -0.1278));
    let point = ledger.capture(&mut provider).unwrap();

    assert_eq!(ledger.points(), std::slice::from_ref(&point));

    // A fresh ledger over the same store sees the committed row.
    let mut reloaded = LocationLedger::new(SqliteLocationRepository::new(&conn));
    reloaded.reload().unwrap();
    assert_eq!(reloaded.points(), std::slice::from_ref(&point));
}

#[test]
fn denied_permission_touches_neither_storage_nor_position_api() {
    let conn = open_db_in_memory().unwrap();
    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));

    let mut provider = ReportedProvider::denied();
    let err = ledger.capture(&mut provider).unwrap_err();

    assert!(matches!(err, LedgerError::PermissionDenied));
    assert_eq!(provider.position_requests(), 0);
    assert!(ledger.points().is_empty());
    assert!(SqliteLocationRepository::new(&conn)
        .list_points()
        .unwrap()
        .is_empty());
}

#[test]
fn position_failure_writes_no_row_and_keeps_cache() {
    let conn = open_db_in_memory().unwrap();
    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));

    let mut seed = ReportedProvider::granted(Coordinates::new(35.6762, 139.6503));
    let existing = ledger.capture(&mut seed).unwrap();

    let mut provider = ReportedProvider::unavailable(PositionError::Timeout);
    let err = ledger.capture(&mut provider).unwrap_err();

    assert!(matches!(
        err,
        LedgerError::PositionUnavailable(PositionError::Timeout)
    ));
    assert_eq!(ledger.points(), std::slice::from_ref(&existing));
    assert_eq!(
        SqliteLocationRepository::new(&conn).list_points().unwrap(),
        vec![existing]
    );
}

#[test]
fn storage_write_failure_leaves_cache_unchanged() {
    let mut ledger = LocationLedger::new(FailingRepository);

    let mut provider = ReportedProvider::granted(Coordinates::new(1.0, 2.0));
    let err = ledger.capture(&mut provider).unwrap_err();

    assert!(matches!(err, LedgerError::StorageWrite(_)));
    assert!(ledger.points().is_empty());
}

#[test]
fn reload_surfaces_storage_read_failure_without_clearing_cache() {
    let mut ledger = LocationLedger::new(FailingRepository);

    let err = ledger.reload().unwrap_err();
    assert!(matches!(err, LedgerError::StorageRead(_)));
    assert!(ledger.points().is_empty());
}

#[test]
fn n_captures_then_fresh_reload_returns_all_in_order() {
    let conn = open_db_in_memory().unwrap();
    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));

    let captures = 5;
    for index in 0..captures {
        let offset = f64::from(index);
        let mut provider =
            ReportedProvider::granted(Coordinates::new(10.0 + offset, 20.0 + offset));
        ledger.capture(&mut provider).unwrap();
    }

    let mut reloaded = LocationLedger::new(SqliteLocationRepository::new(&conn));
    let points: Vec<LocationPoint> = reloaded.reload().unwrap().to_vec();

    assert_eq!(points.len(), captures as usize);
    for window in points.windows(2) {
        assert!(window[0].id < window[1].id);
    }
    for (index, point) in points.iter().enumerate() {
        let offset = index as f64;
        assert_eq!(point.latitude, 10.0 + offset);
        assert_eq!(point.longitude, 20.0 + offset);
    }
}

#[test]
fn reload_replaces_cache_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));

    let mut provider = ReportedProvider::granted(Coordinates::new(48.8566, 2.3522));
    ledger.capture(&mut provider).unwrap();

    // A write the cache never saw, inserted behind the ledger's back.
    SqliteLocationRepository::new(&conn)
        .insert_point(Coordinates::new(-23.5505, -46.6333))
        .unwrap();
    assert_eq!(ledger.points().len(), 1);

    let points = ledger.reload().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].latitude, -23.5505);
}

/// Repository double whose every operation fails with a storage error.
struct FailingRepository;

impl LocationRepository for FailingRepository {
    fn insert_point(&self, _coordinates: Coordinates) -> RepoResult<LocationPoint> {
        Err(RepoError::InvalidData("injected write failure".to_string()))
    }

    fn list_points(&self) -> RepoResult<Vec<LocationPoint>> {
        Err(RepoError::InvalidData("injected read failure".to_string()))
    }
}
