//! Preference repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide raw key/value access over the `preferences` table.
//! - Leave value encoding/decoding to the service layer.
//!
//! # Invariants
//! - Absent keys read as `None`, never as an error.
//! - Writes are last-write-wins upserts.

use crate::repo::RepoResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for durable key/value preferences.
pub trait PreferenceRepository {
    /// Reads the raw stored value for `key`, or `None` when never set.
    fn read_value(&self, key: &str) -> RepoResult<Option<String>>;

    /// Overwrites the stored value for `key`.
    fn write_value(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed preference repository.
pub struct SqlitePreferenceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceRepository for SqlitePreferenceRepository<'_> {
    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
