//! Event record and raw form input.
//!
//! # Responsibility
//! - Define the canonical event record stored under the events key.
//! - Carry raw, untrimmed form values until they are validated.
//!
//! # Invariants
//! - `Event` fields are private; callers read them through accessors.
//! - Values are kept exactly as typed; validation never rewrites them.

use crate::model::validate::{validate, ValidationError};
use serde::{Deserialize, Serialize};

/// Ordered event sequence in insertion order. Position is the only identity.
pub type EventList = Vec<Event>;

/// One validated calendar entry.
///
/// Serialized as `{"title", "date", "description"}`. Deserialization goes
/// through `RawEventFields`, so blank persisted records are refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEventFields")]
pub struct Event {
    title: String,
    /// Free text, usually `YYYY-MM-DD`. Never parsed.
    date: String,
    description: String,
}

impl Event {
    pub(crate) fn from_validated(title: String, date: String, description: String) -> Self {
        Self {
            title,
            date,
            description,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the event back as editable raw fields.
    pub fn to_raw_fields(&self) -> RawEventFields {
        RawEventFields::new(
            self.title.as_str(),
            self.date.as_str(),
            self.description.as_str(),
        )
    }
}

/// Raw values of the three form inputs, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEventFields {
    pub title: String,
    pub date: String,
    pub description: String,
}

impl RawEventFields {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            description: description.into(),
        }
    }

    /// Runs the validator over these inputs.
    pub fn validate(&self) -> Result<Event, ValidationError> {
        validate(&self.title, &self.date, &self.description)
    }

    /// Returns whether every input is empty (the state after a form reset).
    pub fn is_cleared(&self) -> bool {
        self.title.is_empty() && self.date.is_empty() && self.description.is_empty()
    }

    /// Empties all three inputs.
    pub fn clear(&mut self) {
        self.title.clear();
        self.date.clear();
        self.description.clear();
    }
}

impl TryFrom<RawEventFields> for Event {
    type Error = ValidationError;

    fn try_from(value: RawEventFields) -> Result<Self, Self::Error> {
        value.validate()
    }
}
