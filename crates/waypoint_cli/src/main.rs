//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `waypoint_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use waypoint_core::db::open_db_in_memory;
use waypoint_core::{
    Coordinates, LocationLedger, PreferenceStore, ReportedProvider, SqliteLocationRepository,
    SqlitePreferenceRepository,
};

fn main() {
    println!("waypoint_core ping={}", waypoint_core::ping());
    println!("waypoint_core version={}", waypoint_core::core_version());

    // Exercise the full capture path against a throwaway in-memory store so
    // the probe also validates schema and workflow wiring.
    match smoke_capture() {
        Ok(summary) => println!("waypoint_core smoke={summary}"),
        Err(message) => {
            eprintln!("waypoint_core smoke failed: {message}");
            std::process::exit(1);
        }
    }
}

fn smoke_capture() -> Result<String, String> {
    let conn = open_db_in_memory().map_err(|err| err.to_string())?;

    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));
    let mut provider = ReportedProvider::granted(Coordinates::new(37.7749, -122.4194));
    let point = ledger
        .capture(&mut provider)
        .map_err(|err| err.to_string())?;

    let store = PreferenceStore::new(SqlitePreferenceRepository::new(&conn));
    store.set_dark_mode(true);

    Ok(format!(
        "captured_id={} cached={} dark_mode={}",
        point.id,
        ledger.points().len(),
        store.dark_mode()
    ))
}
