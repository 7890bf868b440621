//! Submission orchestrator.
//!
//! # Invariants
//! - Startup rehydrates before the first render.
//! - Rejection: alert only. No list, storage or field change.
//! - Acceptance order: append (persist) → render → reset fields.
//! - `submit` returns only after storage has been written or the
//!   submission has been rejected.

use crate::model::event::RawEventFields;
use crate::model::validate::ValidationError;
use crate::render::render_events;
use crate::storage::PersistenceAdapter;
use crate::store::event_store::EventStore;
use crate::surface::EventSurface;
use log::{error, info};

/// Outcome of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Event appended at 1-based `position`. `persisted` is false when the
    /// storage write failed and only the in-memory list holds it.
    Accepted { position: usize, persisted: bool },
    Rejected(ValidationError),
}

impl SubmitResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Wires one `EventStore` to one surface for a page session.
pub struct EventManager<S: PersistenceAdapter, U: EventSurface> {
    store: EventStore<S>,
    surface: U,
}

impl<S: PersistenceAdapter, U: EventSurface> EventManager<S, U> {
    /// Starts a session: rehydrates from `storage`, then renders once.
    pub fn start(storage: S, surface: U) -> Self {
        Self::with_store(EventStore::new(storage), surface)
    }

    /// Starts a session over a preconfigured store.
    pub fn with_store(mut store: EventStore<S>, surface: U) -> Self {
        store.rehydrate();
        let mut manager = Self { store, surface };
        manager.render();
        manager
    }

    /// Validates and records one submission.
    pub fn submit(&mut self, raw: &RawEventFields) -> SubmitResult {
        let event = match raw.validate() {
            Ok(event) => event,
            Err(reason) => {
                info!("event=event_submit module=service status=rejected reason=missing_fields");
                self.surface.alert(reason.message());
                return SubmitResult::Rejected(reason);
            }
        };

        let persisted = match self.store.append(event) {
            Ok(()) => true,
            Err(err) => {
                error!("event=event_submit module=service status=degraded persisted=false error={err}");
                false
            }
        };
        let position = self.store.len();

        self.render();
        self.surface.reset_fields();

        info!("event=event_submit module=service status=accepted position={position} persisted={persisted}");
        SubmitResult::Accepted {
            position,
            persisted,
        }
    }

    /// Reads the surface inputs and submits them ("Add Event").
    pub fn submit_form(&mut self) -> SubmitResult {
        let raw = self.surface.read_fields();
        self.submit(&raw)
    }

    /// Re-renders the full current list to the surface.
    pub fn render(&mut self) {
        let cards = render_events(self.store.current_list());
        self.surface.render(&cards);
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// Ends the session, handing back the store and surface.
    pub fn into_parts(self) -> (EventStore<S>, U) {
        (self.store, self.surface)
    }
}
