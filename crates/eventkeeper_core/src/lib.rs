//! Core logic for EventKeeper, a local-first event list.
//! This crate owns the event invariants: what a valid event is, what
//! "saved" means, and what survives a reload.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod storage;
pub mod store;
pub mod surface;

pub use config::{StoreConfig, EVENTS_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{Event, EventList, RawEventFields};
pub use model::validate::{validate, ValidationError, MISSING_FIELDS_MESSAGE};
pub use render::{format_event_list, render_events, EventCard, EMPTY_LIST_TEXT};
pub use service::event_manager::{EventManager, SubmitResult};
pub use storage::{
    MemoryStorage, PersistenceAdapter, SqliteStorage, StorageError, StorageResult,
};
pub use store::event_store::{decode_event_list, EventStore, StoreError, StoreResult};
pub use surface::{EventSurface, MemorySurface};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
