//! Repository layer over the persisted key-value store.
//!
//! # Responsibility
//! - Define the key-value storage contract and its SQLite implementation.
//! - Map the `entries`, `username` and `profilePic` keys to domain types.
//!
//! # Invariants
//! - Every entry mutation is a full read-modify-write under the store lock.
//! - Write paths call `Entry::validate()` for newly created entries.

use crate::db::DbError;
use crate::model::entry::EntryValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod entry_repo;
pub mod kv_repo;
pub mod profile_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer error for entry and profile storage.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialization(serde_json::Error),
    Validation(EntryValidationError),
    EntryIndexOutOfRange { index: usize, len: usize },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode stored value: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::EntryIndexOutOfRange { index, len } => {
                write!(f, "entry index {index} is out of range for {len} entries")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::EntryIndexOutOfRange { .. } | Self::InvalidData(_) => None,
        }
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

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
