//! Store configuration.

/// Storage key holding the serialized event list.
pub const EVENTS_STORAGE_KEY: &str = "events";

/// Settings for an `EventStore` instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key under which the full event list is written.
    pub storage_key: String,
}

impl StoreConfig {
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_storage_key(EVENTS_STORAGE_KEY)
    }
}
