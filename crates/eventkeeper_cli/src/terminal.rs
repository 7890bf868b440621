//! Terminal implementation of the event surface.
//!
//! One process invocation is one page load: inputs come from arguments,
//! alerts go to stderr, and the last render is printed on exit.

use eventkeeper_core::{format_event_list, EventCard, EventSurface, RawEventFields};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    fields: RawEventFields,
    screen: String,
    alerted: bool,
}

impl TerminalSurface {
    pub fn with_fields(fields: RawEventFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Text of the most recent render.
    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Whether an alert was shown during this run.
    pub fn alerted(&self) -> bool {
        self.alerted
    }
}

impl EventSurface for TerminalSurface {
    fn read_fields(&self) -> RawEventFields {
        self.fields.clone()
    }

    fn reset_fields(&mut self) {
        self.fields.clear();
    }

    fn alert(&mut self, message: &str) {
        self.alerted = true;
        eprintln!("{message}");
    }

    fn render(&mut self, cards: &[EventCard]) {
        self.screen = format_event_list(cards);
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalSurface;
    use eventkeeper_core::{EventManager, MemoryStorage, RawEventFields, EMPTY_LIST_TEXT};

    #[test]
    fn start_shows_empty_placeholder() {
        let manager = EventManager::start(MemoryStorage::new(), TerminalSurface::default());
        assert_eq!(manager.surface().screen(), EMPTY_LIST_TEXT);
    }

    #[test]
    fn accepted_submission_updates_screen() {
        let fields = RawEventFields::new("Workshop", "2026-07-01", "Coding practice");
        let mut manager =
            EventManager::start(MemoryStorage::new(), TerminalSurface::with_fields(fields));

        assert!(manager.submit_form().is_accepted());
        assert_eq!(
            manager.surface().screen(),
            "1. Workshop (2026-07-01)\n   Coding practice"
        );
        assert!(!manager.surface().alerted());
    }

    #[test]
    fn rejected_submission_marks_alert() {
        let fields = RawEventFields::new("Workshop", "", "Coding practice");
        let mut manager =
            EventManager::start(MemoryStorage::new(), TerminalSurface::with_fields(fields));

        assert!(!manager.submit_form().is_accepted());
        assert!(manager.surface().alerted());
        assert_eq!(manager.surface().screen(), EMPTY_LIST_TEXT);
    }
}
