//! In-process store backing tests and embedding callers. All maps live under
//! one mutex, so a batch commit is trivially atomic: validation happens
//! before any insert, and the lock is held across the whole batch.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::data::event::{Bout, Event};
use crate::data::fighter::Fighter;
use crate::error::StoreError;
use crate::sim::fight::FightOutcome;

use super::{EventStore, FighterRepository, SimulationStore};

#[derive(Debug, Default)]
struct Inner {
    fighters: HashMap<Uuid, Fighter>,
    events: HashMap<Uuid, Event>,
    bouts: HashMap<Uuid, Bout>,
    fights: Vec<FightOutcome>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fighters(fighters: impl IntoIterator<Item = Fighter>) -> Self {
        let store = Self::new();
        for fighter in fighters {
            store.insert_fighter(fighter);
        }
        store
    }

    pub fn insert_fighter(&self, fighter: Fighter) {
        let mut inner = self.lock();
        inner.fighters.insert(fighter.id, fighter);
    }

    pub fn insert_event(&self, event: Event) {
        let mut inner = self.lock();
        inner.events.insert(event.id, event);
    }

    pub fn insert_bout(&self, bout: Bout) {
        let mut inner = self.lock();
        inner.bouts.insert(bout.id, bout);
    }

    pub fn bout(&self, id: Uuid) -> Option<Bout> {
        self.lock().bouts.get(&id).cloned()
    }

    /// Standalone fight results recorded so far, oldest first.
    pub fn recorded_fights(&self) -> Vec<FightOutcome> {
        self.lock().fights.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a writer panicked mid-mutation; the data is
        // still consistent because every mutation is insert-only under the lock.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FighterRepository for MemoryStore {
    fn fighter(&self, id: Uuid) -> Option<Fighter> {
        self.lock().fighters.get(&id).filter(|f| !f.deleted).cloned()
    }
}

impl SimulationStore for MemoryStore {
    fn record_fight(&self, outcome: &FightOutcome) -> Result<(), StoreError> {
        self.lock().fights.push(outcome.clone());
        Ok(())
    }
}

impl EventStore for MemoryStore {
    fn event(&self, id: Uuid) -> Option<Event> {
        self.lock().events.get(&id).cloned()
    }

    fn bouts_for_event(&self, event_id: Uuid) -> Vec<Bout> {
        self.lock()
            .bouts
            .values()
            .filter(|bout| bout.event_id == event_id)
            .cloned()
            .collect()
    }

    fn commit_event(&self, event: Event, bouts: Vec<Bout>) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if !inner.events.contains_key(&event.id) {
            return Err(StoreError::Conflict(format!("unknown event {}", event.id)));
        }
        if let Some(stray) = bouts.iter().find(|bout| bout.event_id != event.id) {
            return Err(StoreError::Conflict(format!(
                "bout {} does not belong to event {}",
                stray.id, event.id
            )));
        }
        for bout in bouts {
            inner.bouts.insert(bout.id, bout);
        }
        inner.events.insert(event.id, event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::data::event::{BoutStatus, EventStatus};

    use super::*;

    fn fighter(name: &str) -> Fighter {
        Fighter {
            id: Uuid::new_v4(),
            name: name.to_string(),
            nickname: None,
            height_cm: None,
            weight_lbs: None,
            reach_cm: None,
            slpm: None,
            sapm: None,
            str_acc: None,
            str_def: None,
            td_avg: None,
            td_acc: None,
            td_def: None,
            sub_avg: None,
            striking: 50.0,
            grappling: 50.0,
            defense: 50.0,
            stamina: 50.0,
            speed: 50.0,
            strategy: 50.0,
            wins: 0,
            losses: 0,
            draws: 0,
            deleted: false,
        }
    }

    #[test]
    fn soft_deleted_fighters_are_invisible() {
        let mut ghost = fighter("ghost");
        ghost.deleted = true;
        let id = ghost.id;
        let store = MemoryStore::with_fighters([ghost]);
        assert!(store.fighter(id).is_none());
    }

    #[test]
    fn commit_rejects_bouts_from_another_event() {
        let store = MemoryStore::new();
        let event = Event::scheduled(Uuid::new_v4(), "FC 1");
        store.insert_event(event.clone());

        let stray = Bout::scheduled(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), 1, 3);
        let stray_id = stray.id;
        store.insert_bout(stray.clone());

        let mut mutated = stray;
        mutated.status = BoutStatus::Simulated;
        let mut completed = event;
        completed.status = EventStatus::Completed;

        let err = store.commit_event(completed.clone(), vec![mutated]).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        // Nothing applied.
        assert_eq!(store.bout(stray_id).unwrap().status, BoutStatus::Scheduled);
        assert_eq!(store.event(completed.id).unwrap().status, EventStatus::Scheduled);
    }
}
