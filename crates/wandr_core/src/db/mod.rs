//! Journal database bootstrap.
//!
//! Everything Wandr persists lives in one `kv_store` table, so the schema
//! is small: `open` brings a connection up and `migrations` creates or
//! upgrades that table. Repositories only ever receive migrated connections.
//!
//! A database written by a newer app build is refused rather than read,
//! since its `PRAGMA user_version` may describe keys this build does not
//! understand.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Stored `user_version` is ahead of the last bundled migration.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "journal database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "journal database is at schema {found}; this build supports up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
