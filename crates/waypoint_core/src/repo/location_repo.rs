//! Location ledger repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide append and read-all APIs over the canonical `locations` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Coordinates::validate()` before SQL mutations.
//! - Rows are returned in ascending `id` order, which equals insertion order.
//! - The ledger is append-only; no update or delete statements exist here.

use crate::model::location::{Coordinates, LocationPoint};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the append-only coordinate ledger.
pub trait LocationRepository {
    /// Inserts one coordinate pair and returns the row with its assigned id.
    fn insert_point(&self, coordinates: Coordinates) -> RepoResult<LocationPoint>;

    /// Returns every persisted point in ascending id order.
    fn list_points(&self) -> RepoResult<Vec<LocationPoint>>;
}

/// SQLite-backed ledger repository.
pub struct SqliteLocationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLocationRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LocationRepository for SqliteLocationRepository<'_> {
    fn insert_point(&self, coordinates: Coordinates) -> RepoResult<LocationPoint> {
        coordinates.validate()?;

        self.conn.execute(
            "INSERT INTO locations (latitude, longitude) VALUES (?1, ?2);",
            params![coordinates.latitude, coordinates.longitude],
        )?;

        Ok(LocationPoint {
            id: self.conn.last_insert_rowid(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        })
    }

    fn list_points(&self) -> RepoResult<Vec<LocationPoint>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, latitude, longitude
             FROM locations
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut points = Vec::new();
        while let Some(row) = rows.next()? {
            points.push(parse_point_row(row)?);
        }

        Ok(points)
    }
}

fn parse_point_row(row: &Row<'_>) -> RepoResult<LocationPoint> {
    let point = LocationPoint {
        id: row.get("id")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    };

    // A row outside coordinate ranges means the store was tampered with or
    // written by a foreign tool; surface it instead of rendering garbage.
    if let Err(err) = point.coordinates().validate() {
        return Err(RepoError::InvalidData(format!(
            "row id {}: {err}",
            point.id
        )));
    }

    Ok(point)
}
