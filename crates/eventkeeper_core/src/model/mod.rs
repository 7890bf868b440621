//! Event domain model and field validation.
//!
//! # Responsibility
//! - Define the single persisted entity (`Event`) and its wire shape.
//! - Own the pure validation step between raw form input and `Event`.
//!
//! # Invariants
//! - An `Event` always has non-blank `title`, `date` and `description`.
//! - The only ways to obtain an `Event` are `validate()` and
//!   deserialization, and both run the same check.

pub mod event;
pub mod validate;
