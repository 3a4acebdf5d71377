//! Location ledger use-case service.
//!
//! # Responsibility
//! - Drive the permission -> position -> persist capture workflow.
//! - Keep the in-memory display list synchronized with the durable ledger.
//!
//! # Invariants
//! - After a successful capture the cache equals previous contents plus the
//!   new point; after `reload()` it equals the full ledger in id order.
//! - A failed capture leaves both the ledger and the cache unchanged.
//! - Each capture invocation is independent; failures are terminal for that
//!   invocation and never retried.

use crate::model::location::LocationPoint;
use crate::platform::location::{LocationProvider, PermissionStatus, PositionError};
use crate::repo::location_repo::LocationRepository;
use crate::repo::RepoError;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Terminal failure of one capture or reload invocation.
#[derive(Debug)]
pub enum LedgerError {
    /// Foreground location permission was denied. The caller must present a
    /// user-visible notice; storage was never touched.
    PermissionDenied,
    /// Permission was granted but no position fix could be obtained.
    PositionUnavailable(PositionError),
    /// The insert failed; the ledger and the cache are unchanged.
    StorageWrite(RepoError),
    /// The read failed; callers present an empty list rather than crash.
    StorageRead(RepoError),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "location permission denied"),
            Self::PositionUnavailable(err) => write!(f, "position unavailable: {err}"),
            Self::StorageWrite(err) => write!(f, "failed to persist location: {err}"),
            Self::StorageRead(err) => write!(f, "failed to read locations: {err}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PermissionDenied => None,
            Self::PositionUnavailable(err) => Some(err),
            Self::StorageWrite(err) | Self::StorageRead(err) => Some(err),
        }
    }
}

/// Durable coordinate ledger plus its in-memory display mirror.
///
/// The cache is a read-only, id-ordered copy of ledger contents used by the
/// presentation layer. `capture()` appends to it only after the insert
/// committed; `reload()` replaces it wholesale.
pub struct LocationLedger<R: LocationRepository> {
    repo: R,
    cache: Vec<LocationPoint>,
}

impl<R: LocationRepository> LocationLedger<R> {
    /// Creates a ledger with an empty cache; call `reload()` to populate it.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cache: Vec::new(),
        }
    }

    /// Read-only view of the in-memory display list.
    pub fn points(&self) -> &[LocationPoint] {
        &self.cache
    }

    /// Runs one capture invocation: permission -> position -> persist.
    ///
    /// Steps run strictly in order; every failure is terminal for this
    /// invocation. On success the fully populated point (with its assigned
    /// id) is appended to the cache and returned.
    ///
    /// # Errors
    /// - `PermissionDenied` when the platform denies foreground permission.
    /// - `PositionUnavailable` when the one-shot fix fails; no retry.
    /// - `StorageWrite` when the insert fails; the cache is left unchanged.
    pub fn capture(
        &mut self,
        provider: &mut impl LocationProvider,
    ) -> Result<LocationPoint, LedgerError> {
        let started_at = Instant::now();
        info!("event=capture module=ledger status=start");

        if provider.request_foreground_permission() == PermissionStatus::Denied {
            warn!(
                "event=capture module=ledger status=denied duration_ms={} error_code=permission_denied",
                started_at.elapsed().as_millis()
            );
            return Err(LedgerError::PermissionDenied);
        }

        let coordinates = match provider.current_position() {
            Ok(coordinates) => coordinates,
            Err(err) => {
                warn!(
                    "event=capture module=ledger status=error duration_ms={} error_code=position_unavailable error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(LedgerError::PositionUnavailable(err));
            }
        };

        let point = match self.repo.insert_point(coordinates) {
            Ok(point) => point,
            Err(err) => {
                error!(
                    "event=capture module=ledger status=error duration_ms={} error_code=storage_write error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(LedgerError::StorageWrite(err));
            }
        };

        // Append only after the insert committed, so the cache never holds
        // an orphaned entry.
        self.cache.push(point);
        info!(
            "event=capture module=ledger status=ok duration_ms={} id={}",
            started_at.elapsed().as_millis(),
            point.id
        );
        Ok(point)
    }

    /// Replaces the cache wholesale with the full ledger contents.
    ///
    /// Reflects every write committed before this read began, in ascending
    /// id order. On failure the cache keeps its previous contents.
    pub fn reload(&mut self) -> Result<&[LocationPoint], LedgerError> {
        match self.repo.list_points() {
            Ok(points) => {
                self.cache = points;
                info!(
                    "event=ledger_reload module=ledger status=ok count={}",
                    self.cache.len()
                );
                Ok(&self.cache)
            }
            Err(err) => {
                error!(
                    "event=ledger_reload module=ledger status=error error_code=storage_read error={}",
                    err
                );
                Err(LedgerError::StorageRead(err))
            }
        }
    }
}
