//! Pure field validation for event submissions.
//!
//! # Invariants
//! - Any input that is empty after trimming rejects the whole submission.
//! - Rejection carries one uniform message; missing fields are not named.
//! - Accepted values are stored untrimmed.

use crate::model::event::Event;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-facing text shown when a submission is rejected.
pub const MISSING_FIELDS_MESSAGE: &str = "Fill all fields!";

/// Reason a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of title/date/description is blank.
    MissingFields,
}

impl ValidationError {
    /// Exact alert text for this rejection.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => MISSING_FIELDS_MESSAGE,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}

/// Validates raw form input into an `Event`.
///
/// Deterministic and side-effect free.
pub fn validate(title: &str, date: &str, description: &str) -> Result<Event, ValidationError> {
    if [title, date, description]
        .iter()
        .any(|value| value.trim().is_empty())
    {
        return Err(ValidationError::MissingFields);
    }

    Ok(Event::from_validated(
        title.to_owned(),
        date.to_owned(),
        description.to_owned(),
    ))
}
