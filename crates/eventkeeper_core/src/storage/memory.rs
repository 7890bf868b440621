//! In-process key-value storage.
//!
//! Clones share one map, so a store built after a simulated reload sees what
//! the previous store wrote.

use super::{PersistenceAdapter, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every entry, like clearing browser storage between sessions.
    pub fn clear(&self) -> StorageResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    /// Returns whether `key` currently holds a value.
    pub fn contains_key(&self, key: &str) -> StorageResult<bool> {
        Ok(self.lock()?.contains_key(key))
    }

    /// Makes subsequent writes fail with `StorageError::Unavailable`.
    ///
    /// Reads keep working. Used to exercise quota/outage handling.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl PersistenceAdapter for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!(
                "writes rejected for key `{key}`"
            )));
        }
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
