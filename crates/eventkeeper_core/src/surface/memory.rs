//! In-memory surface for tests and headless embedding.

use super::EventSurface;
use crate::model::event::RawEventFields;
use crate::render::EventCard;

/// Records everything the manager shows and lets callers "type" input.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    fields: RawEventFields,
    alerts: Vec<String>,
    cards: Vec<EventCard>,
    render_count: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_title(&mut self, value: &str) {
        self.fields.title.push_str(value);
    }

    pub fn type_date(&mut self, value: &str) {
        self.fields.date.push_str(value);
    }

    pub fn type_description(&mut self, value: &str) {
        self.fields.description.push_str(value);
    }

    /// Types all three inputs at once.
    pub fn fill(&mut self, title: &str, date: &str, description: &str) {
        self.type_title(title);
        self.type_date(date);
        self.type_description(description);
    }

    pub fn fields(&self) -> &RawEventFields {
        &self.fields
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }

    /// Cards from the most recent render.
    pub fn cards(&self) -> &[EventCard] {
        &self.cards
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Returns whether a rendered card has exactly this title.
    pub fn shows_title(&self, title: &str) -> bool {
        self.cards.iter().any(|card| card.title == title)
    }
}

impl EventSurface for MemorySurface {
    fn read_fields(&self) -> RawEventFields {
        self.fields.clone()
    }

    fn reset_fields(&mut self) {
        self.fields.clear();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn render(&mut self, cards: &[EventCard]) {
        self.cards = cards.to_vec();
        self.render_count += 1;
    }
}
