//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths must validate coordinates before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::location::CoordinatesError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod location_repo;
pub mod preference_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error shared by ledger and preference persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(CoordinatesError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<CoordinatesError> for RepoError {
    fn from(value: CoordinatesError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
