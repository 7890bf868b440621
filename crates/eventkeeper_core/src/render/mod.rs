//! Pure projection from the event list to visible cards.
//!
//! # Invariants
//! - Same list, same output. No state, no diffing.
//! - Card order follows list order; positions are 1-based.

use crate::model::event::Event;
use std::fmt::{Display, Formatter};

/// Line shown by text hosts when the list is empty.
pub const EMPTY_LIST_TEXT: &str = "No events yet.";

/// One visible unit of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub position: usize,
    pub title: String,
    pub date: String,
    pub description: String,
}

impl Display for EventCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} ({})\n   {}",
            self.position, self.title, self.date, self.description
        )
    }
}

/// Renders the full list into cards.
pub fn render_events(events: &[Event]) -> Vec<EventCard> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| EventCard {
            position: index + 1,
            title: event.title().to_owned(),
            date: event.date().to_owned(),
            description: event.description().to_owned(),
        })
        .collect()
}

/// Formats rendered cards as plain text, one card per block.
pub fn format_event_list(cards: &[EventCard]) -> String {
    if cards.is_empty() {
        return EMPTY_LIST_TEXT.to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
