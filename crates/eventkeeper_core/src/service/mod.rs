//! Use-case orchestration.
//!
//! # Responsibility
//! - Sequence validation, persistence, rendering and form reset.
//! - Keep hosts decoupled from storage and validation details.

pub mod event_manager;
