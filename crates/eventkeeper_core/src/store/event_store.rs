//! Event list store over a `PersistenceAdapter`.
//!
//! # Invariants
//! - The list is always a concrete (possibly empty) ordered sequence.
//! - Every `append` rewrites the whole list under the configured key.
//! - When `append` returns `Ok`, decoding storage yields `current_list()`.
//! - A failed write keeps the appended event in memory.

use crate::config::StoreConfig;
use crate::model::event::{Event, EventList};
use crate::storage::{PersistenceAdapter, StorageError};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure to persist the list after an in-memory append.
#[derive(Debug)]
pub enum StoreError {
    Encode(serde_json::Error),
    Write(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode event list: {err}"),
            Self::Write(err) => write!(f, "failed to write event list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Write(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Write(value)
    }
}

/// Owner of the canonical event list for one session.
pub struct EventStore<S: PersistenceAdapter> {
    storage: S,
    config: StoreConfig,
    events: EventList,
}

impl<S: PersistenceAdapter> EventStore<S> {
    /// Creates a store with an empty list. Performs no I/O.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self {
            storage,
            config,
            events: EventList::new(),
        }
    }

    /// Creates a store and immediately rehydrates it from storage.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.rehydrate();
        store
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Absent, unreadable or malformed values yield an empty list.
    pub fn rehydrate(&mut self) {
        let key = self.config.storage_key.as_str();
        self.events = match self.storage.read(key) {
            Ok(Some(bytes)) => decode_event_list(&bytes),
            Ok(None) => {
                debug!("event=store_rehydrate module=store status=empty reason=absent_key");
                EventList::new()
            }
            Err(err) => {
                warn!(
                    "event=store_rehydrate module=store status=fallback reason=read_failed error={err}"
                );
                EventList::new()
            }
        };
        info!(
            "event=store_rehydrate module=store status=ok count={}",
            self.events.len()
        );
    }

    /// Appends one event and writes the full list back to storage.
    ///
    /// # Errors
    /// - `Encode`/`Write` when persistence fails. The event stays in the
    ///   in-memory list either way.
    pub fn append(&mut self, event: Event) -> StoreResult<()> {
        self.events.push(event);
        let count = self.events.len();

        let result = serde_json::to_vec(&self.events)
            .map_err(StoreError::Encode)
            .and_then(|bytes| {
                self.storage
                    .write(self.config.storage_key.as_str(), &bytes)
                    .map_err(StoreError::Write)
            });

        match &result {
            Ok(()) => info!("event=event_append module=store status=ok count={count}"),
            Err(err) => error!(
                "event=event_append module=store status=error count={count} persisted=false error={err}"
            ),
        }
        result
    }

    /// Read-only view of the current list, in insertion order.
    pub fn current_list(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Backing storage, for inspecting the durable shadow.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Decodes a stored list, skipping records that fail validation.
///
/// Anything other than a JSON array decodes to an empty list.
pub fn decode_event_list(bytes: &[u8]) -> EventList {
    let records = match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Array(records)) => records,
        Ok(other) => {
            warn!(
                "event=store_decode module=store status=fallback reason=not_a_list json_type={}",
                json_type_name(&other)
            );
            return EventList::new();
        }
        Err(err) => {
            warn!(
                "event=store_decode module=store status=fallback reason=parse_failed category={:?} line={} column={}",
                err.classify(),
                err.line(),
                err.column()
            );
            return EventList::new();
        }
    };

    let mut events = EventList::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Event>(record) {
            Ok(event) => events.push(event),
            Err(err) => warn!(
                "event=store_decode module=store status=skip index={index} category={:?}",
                err.classify()
            ),
        }
    }
    events
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_event_list, EventStore, StoreError};
    use crate::config::StoreConfig;
    use crate::model::validate::validate;
    use crate::storage::{MemoryStorage, PersistenceAdapter};

    #[test]
    fn decode_accepts_wire_records_in_order() {
        let bytes = br#"[
            {"title":"Event One","date":"2026-08-01","description":"First"},
            {"title":"Event Two","date":"2026-09-01","description":"Second"}
        ]"#;
        let events = decode_event_list(bytes);
        let titles: Vec<_> = events.iter().map(|e| e.title()).collect();
        assert_eq!(titles, ["Event One", "Event Two"]);
    }

    #[test]
    fn decode_falls_back_to_empty_for_non_lists() {
        let inputs: [&[u8]; 6] = [b"null", b"{}", b"\"events\"", b"42", b"not json", b""];
        for raw in inputs {
            assert!(decode_event_list(raw).is_empty(), "input {raw:?}");
        }
    }

    #[test]
    fn decode_skips_invalid_records() {
        let bytes = br#"[
            {"title":"Kept","date":"2026-01-01","description":"ok"},
            {"title":"","date":"2026-01-02","description":"blank title"},
            {"title":"No date","description":"missing field"},
            7,
            {"title":"Also kept","date":"2026-01-03","description":"ok"}
        ]"#;
        let events = decode_event_list(bytes);
        let titles: Vec<_> = events.iter().map(|e| e.title()).collect();
        assert_eq!(titles, ["Kept", "Also kept"]);
    }

    #[test]
    fn append_writes_under_configured_key() {
        let storage = MemoryStorage::new();
        let mut store =
            EventStore::with_config(&storage, StoreConfig::with_storage_key("calendar"));

        store
            .append(validate("Workshop", "2026-07-01", "Coding practice").unwrap())
            .unwrap();

        assert_eq!(store.config().storage_key, "calendar");
        assert!(storage.read("events").unwrap().is_none());
        let stored = storage.read("calendar").unwrap().unwrap();
        assert_eq!(decode_event_list(&stored), store.current_list());
    }

    #[test]
    fn failed_write_keeps_event_in_memory() {
        let storage = MemoryStorage::new();
        storage.set_reject_writes(true);
        let mut store = EventStore::open(&storage);

        let err = store
            .append(validate("Offline", "2026-07-01", "quota").unwrap())
            .unwrap_err();

        assert!(matches!(err, StoreError::Write(_)));
        assert_eq!(store.len(), 1);
        assert!(storage.read("events").unwrap().is_none());
    }
}
