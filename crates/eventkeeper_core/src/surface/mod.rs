//! Host-facing form/collection interface.
//!
//! # Responsibility
//! - Abstract the three inputs, the alert channel and the rendered
//!   collection so the manager can run without a real UI.
//!
//! # See also
//! - `service::event_manager` for the call order.

pub mod memory;

pub use memory::MemorySurface;

use crate::model::event::RawEventFields;
use crate::render::EventCard;

/// The input form, alert channel and event collection of one page.
pub trait EventSurface {
    /// Current raw values of the title, date and description inputs.
    fn read_fields(&self) -> RawEventFields;
    /// Empties all three inputs.
    fn reset_fields(&mut self);
    /// Shows a user-visible notification.
    fn alert(&mut self, message: &str);
    /// Replaces the visible collection with `cards`.
    fn render(&mut self, cards: &[EventCard]);
}
