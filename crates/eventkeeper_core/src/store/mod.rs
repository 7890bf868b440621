//! Canonical event list ownership.
//!
//! # Responsibility
//! - Hold the page-lifetime event list and its storage handle.
//! - Keep the in-memory list and its durable shadow in agreement.
//!
//! # Invariants
//! - `EventStore::append` is the only mutation path for the list.
//! - Storage problems on load degrade to an empty list, never an error.

pub mod event_store;
