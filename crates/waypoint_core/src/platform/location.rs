//! Location platform seam.
//!
//! # Responsibility
//! - Define the permission and one-shot position contracts the capture
//!   workflow depends on.
//! - Provide [`ReportedProvider`] for shells that run the platform calls
//!   themselves and report outcomes across the FFI boundary.
//!
//! # Invariants
//! - `current_position` is a one-shot read, never a subscription.
//! - Providers must not be consulted after permission is denied.

use crate::model::location::Coordinates;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Failure to obtain a one-shot position fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// No GPS fix could be acquired.
    NoFix,
    /// The platform location API timed out.
    Timeout,
    /// Any other platform-reported failure.
    Platform(String),
}

impl Display for PositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFix => write!(f, "no position fix available"),
            Self::Timeout => write!(f, "position request timed out"),
            Self::Platform(message) => write!(f, "platform position error: {message}"),
        }
    }
}

impl Error for PositionError {}

/// Contract for the platform permission and position APIs.
///
/// Methods take `&mut self` so implementations can track how often they were
/// consulted (the test doubles rely on this).
pub trait LocationProvider {
    /// Requests foreground location permission from the platform.
    fn request_foreground_permission(&mut self) -> PermissionStatus;

    /// Reads the current device position once.
    fn current_position(&mut self) -> Result<Coordinates, PositionError>;
}

/// Provider backed by outcomes the embedding shell already gathered.
///
/// The Flutter side owns the real platform APIs; it runs them first and
/// reports the results into core, which then drives the gated workflow with
/// unchanged semantics. Also serves as the capture-workflow test double.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedProvider {
    permission: PermissionStatus,
    position: Result<Coordinates, PositionError>,
    position_requests: u32,
}

impl ReportedProvider {
    /// Permission granted with a successful position fix.
    pub fn granted(coordinates: Coordinates) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Ok(coordinates),
            position_requests: 0,
        }
    }

    /// Permission denied; the position result must never be consulted.
    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            position: Err(PositionError::Platform(
                "position requested after permission denial".to_string(),
            )),
            position_requests: 0,
        }
    }

    /// Permission granted but the position fix failed.
    pub fn unavailable(error: PositionError) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Err(error),
            position_requests: 0,
        }
    }

    /// Number of times the position API was consulted.
    pub fn position_requests(&self) -> u32 {
        self.position_requests
    }
}

impl LocationProvider for ReportedProvider {
    fn request_foreground_permission(&mut self) -> PermissionStatus {
        self.permission
    }

    fn current_position(&mut self) -> Result<Coordinates, PositionError> {
        self.position_requests += 1;
        self.position.clone()
    }
}
