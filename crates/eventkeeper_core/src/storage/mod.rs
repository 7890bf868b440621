//! Key-value persistence seam.
//!
//! # Responsibility
//! - Define the byte-level read/write contract the event store relies on.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - Adapters hold no event logic; values are opaque bytes.
//! - A missing key is `Ok(None)`, never an error.
//! - `write` replaces the whole value stored under a key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Db(DbError),
    /// Connection has not been migrated to the version this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Backend refused the operation (quota, poisoned lock, simulated outage).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "storage connection is at schema version {actual_version}, expected {expected_version}; open it with open_db first"
            ),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Synchronous key-value store contract.
pub trait PersistenceAdapter {
    /// Returns the bytes stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;
    /// Stores `value` under `key`, overwriting any previous value.
    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()>;
}

impl<T: PersistenceAdapter + ?Sized> PersistenceAdapter for &T {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        (**self).write(key, value)
    }
}
