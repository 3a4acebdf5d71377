//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the single-screen UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The Dart shell owns the platform permission/position APIs; it reports
//!   their outcomes here and core drives the gated capture workflow.

use log::error;
use std::path::PathBuf;
use std::sync::OnceLock;
use waypoint_core::db::open_db;
use waypoint_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Coordinates, LedgerError, LocationLedger, LocationPoint, LocationRepository, PositionError,
    PreferenceStore, ReportedProvider, SqliteLocationRepository, SqlitePreferenceRepository,
};

const LEDGER_DB_FILE_NAME: &str = "waypoint.sqlite3";
static LEDGER_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One captured location shaped for direct list rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationItem {
    /// Store-assigned id, strictly increasing in capture order.
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    /// List row title, e.g. `Location 3`.
    pub title: String,
    /// List row description, e.g. `Latitude: 37.7749 | Longitude: -122.4194`.
    pub description: String,
}

/// Response envelope for one capture invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureResponse {
    /// Whether a new point was persisted.
    pub ok: bool,
    /// The created point, present only on success.
    pub location: Option<LocationItem>,
    /// Stable machine-readable failure class
    /// (`permission_denied|position_unavailable|storage_write`).
    pub error_code: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Whether the UI must show this failure to the user (permission denial
    /// is the only class that requires an explicit notice).
    pub requires_user_notice: bool,
}

/// Response envelope for the read-all flow.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationListResponse {
    /// All persisted points in capture order. Empty on storage failure.
    pub items: Vec<LocationItem>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// Runs the capture workflow with platform outcomes reported by the shell.
///
/// The Dart side performs the actual permission prompt and one-shot position
/// read, then reports what happened: `permission_granted` plus either both
/// coordinates (fix obtained) or neither (fix failed). Core then runs the
/// permission -> position -> persist sequence with unchanged semantics and
/// appends to durable storage only when every step succeeded.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - On success the returned item carries the store-assigned id; the shell
///   appends it to its displayed list.
#[flutter_rust_bridge::frb(sync)]
pub fn capture_location(
    permission_granted: bool,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> CaptureResponse {
    let mut provider = if !permission_granted {
        ReportedProvider::denied()
    } else {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => {
                ReportedProvider::granted(Coordinates::new(latitude, longitude))
            }
            _ => ReportedProvider::unavailable(PositionError::NoFix),
        }
    };

    let conn = match open_db(resolve_ledger_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=capture module=ffi status=error error_code=db_open_failed error={err}");
            return CaptureResponse {
                ok: false,
                location: None,
                error_code: Some("storage_write".to_string()),
                message: format!("capture failed: {err}"),
                requires_user_notice: false,
            };
        }
    };

    let mut ledger = LocationLedger::new(SqliteLocationRepository::new(&conn));
    match ledger.capture(&mut provider) {
        Ok(point) => CaptureResponse {
            ok: true,
            location: Some(to_location_item(point)),
            error_code: None,
            message: "Location captured.".to_string(),
            requires_user_notice: false,
        },
        Err(err) => {
            let (error_code, requires_user_notice) = classify_ledger_error(&err);
            CaptureResponse {
                ok: false,
                location: None,
                error_code: Some(error_code.to_string()),
                message: format!("capture failed: {err}"),
                requires_user_notice,
            }
        }
    }
}

/// Lists every captured location in capture order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Storage read failures degrade to an empty list with a diagnostic
///   message; the shell renders the list as-is and never crashes.
#[flutter_rust_bridge::frb(sync)]
pub fn list_locations() -> LocationListResponse {
    let conn = match open_db(resolve_ledger_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=list module=ffi status=error error_code=db_open_failed error={err}");
            return LocationListResponse {
                items: Vec::new(),
                message: format!("list_locations failed: {err}"),
            };
        }
    };

    let repo = SqliteLocationRepository::new(&conn);
    match repo.list_points() {
        Ok(points) => {
            let items = points
                .into_iter()
                .map(to_location_item)
                .collect::<Vec<_>>();
            let message = format!("Loaded {} location(s).", items.len());
            LocationListResponse { items, message }
        }
        Err(err) => {
            error!("event=list module=ffi status=error error_code=storage_read error={err}");
            LocationListResponse {
                items: Vec::new(),
                message: format!("list_locations failed: {err}"),
            }
        }
    }
}

/// Returns the stored dark-mode flag, defaulting to `false` when never set.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics and never reports an error; absence and storage failures
///   both yield `false`.
#[flutter_rust_bridge::frb(sync)]
pub fn get_dark_mode() -> bool {
    let conn = match open_db(resolve_ledger_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=pref_read module=ffi status=error error_code=db_open_failed error={err}");
            return false;
        }
    };

    PreferenceStore::new(SqlitePreferenceRepository::new(&conn)).dark_mode()
}

/// Durably overwrites the dark-mode flag.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; write failures are logged and swallowed since the theme
///   is cosmetic.
#[flutter_rust_bridge::frb(sync)]
pub fn set_dark_mode(enabled: bool) {
    let conn = match open_db(resolve_ledger_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=pref_write module=ffi status=error error_code=db_open_failed error={err}"
            );
            return;
        }
    };

    PreferenceStore::new(SqlitePreferenceRepository::new(&conn)).set_dark_mode(enabled);
}

fn classify_ledger_error(err: &LedgerError) -> (&'static str, bool) {
    match err {
        LedgerError::PermissionDenied => ("permission_denied", true),
        LedgerError::PositionUnavailable(_) => ("position_unavailable", false),
        LedgerError::StorageWrite(_) => ("storage_write", false),
        LedgerError::StorageRead(_) => ("storage_read", false),
    }
}

fn to_location_item(point: LocationPoint) -> LocationItem {
    LocationItem {
        id: point.id,
        latitude: point.latitude,
        longitude: point.longitude,
        title: format!("Location {}", point.id),
        description: format!(
            "Latitude: {} | Longitude: {}",
            point.latitude, point.longitude
        ),
    }
}

fn resolve_ledger_db_path() -> PathBuf {
    LEDGER_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("WAYPOINT_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(LEDGER_DB_FILE_NAME)
        })
        .clone()
}
