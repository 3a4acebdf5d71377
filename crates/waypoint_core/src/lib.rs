//! Core domain logic for Waypoint.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod platform;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::location::{Coordinates, CoordinatesError, LocationPoint};
pub use model::theme::ThemePreference;
pub use platform::location::{LocationProvider, PermissionStatus, PositionError, ReportedProvider};
pub use repo::location_repo::{LocationRepository, SqliteLocationRepository};
pub use repo::preference_repo::{PreferenceRepository, SqlitePreferenceRepository};
pub use repo::{RepoError, RepoResult};
pub use service::ledger::{LedgerError, LocationLedger};
pub use service::preferences::PreferenceStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
