//! Persistence collaborator traits. The engine reads fighters and events
//! through these, and hands finished results back; it never owns storage.
//!
//! Two commit granularities exist. A standalone fight commits immediately via
//! [`SimulationStore::record_fight`]. Event simulation stages every bout
//! mutation plus the event's completion and applies them through one
//! [`EventStore::commit_event`] call, which must be all-or-nothing.

pub mod memory;

use uuid::Uuid;

use crate::data::event::{Bout, Event};
use crate::data::fighter::Fighter;
use crate::error::StoreError;
use crate::sim::fight::FightOutcome;

pub use memory::MemoryStore;

/// Read-only fighter lookup. `None` covers both missing and soft-deleted
/// profiles; the engine treats them identically.
pub trait FighterRepository {
    fn fighter(&self, id: Uuid) -> Option<Fighter>;
}

/// Immediate, independent persistence of one standalone fight result.
pub trait SimulationStore {
    fn record_fight(&self, outcome: &FightOutcome) -> Result<(), StoreError>;
}

/// Event/bout persistence with batch-commit semantics.
pub trait EventStore {
    fn event(&self, id: Uuid) -> Option<Event>;

    /// All bouts linked to the event, in no particular order.
    fn bouts_for_event(&self, event_id: Uuid) -> Vec<Bout>;

    /// Durably apply the event mutation and every bout mutation as one unit.
    /// On any error none of the records may change.
    fn commit_event(&self, event: Event, bouts: Vec<Bout>) -> Result<(), StoreError>;
}
