//! Location domain model.
//!
//! # Responsibility
//! - Define the coordinate pair captured from the platform position API.
//! - Define the persisted ledger row shape including its assigned id.
//!
//! # Invariants
//! - `latitude` stays within [-90, 90], `longitude` within [-180, 180].
//! - `id` is assigned by the store in insertion order and never reused.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw coordinate pair as reported by the platform, before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Validation failure for a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatesError {
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl Display for CoordinatesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LatitudeOutOfRange(value) => {
                write!(f, "latitude {value} is outside [-90, 90]")
            }
            Self::LongitudeOutOfRange(value) => {
                write!(f, "longitude {value} is outside [-180, 180]")
            }
        }
    }
}

impl Error for CoordinatesError {}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks coordinate ranges.
    ///
    /// NaN fails both comparisons, so it is rejected here as well.
    pub fn validate(&self) -> Result<(), CoordinatesError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinatesError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinatesError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

/// One persisted ledger row: a coordinate pair plus its store-assigned id.
///
/// Created only by the capture workflow and never mutated afterwards. The
/// in-memory display list holds read-only copies of this shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    /// Store-assigned id, strictly increasing in insertion order.
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPoint {
    /// Returns the coordinate pair without the assigned id.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}
