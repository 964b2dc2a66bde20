//! Event-card orchestration: every unresolved bout in card order, one atomic
//! commit for the whole batch.
//!
//! Bouts already marked simulated are skipped untouched, which makes a retry
//! after a failed commit safe: nothing is persisted until the single
//! `commit_event` call, so a rerun recomputes exactly the bouts that never
//! made it to the store.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::data::event::{Bout, BoutStatus, EventStatus};
use crate::error::SimError;
use crate::model::WinModel;
use crate::store::{EventStore, FighterRepository};

use super::fight::{run_fight, MAX_ROUNDS, MIN_ROUNDS};
use super::outcome::ResultType;
use super::rng::Rng;
use super::round2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub total_fights: u32,
    pub knockouts: u32,
    pub submissions: u32,
    pub decisions: u32,
    /// (KO + submission) / total, as a percentage rounded to two decimals.
    pub finish_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSimulationReport {
    pub event_id: Uuid,
    pub event_name: String,
    /// All bouts of the card in fight order, previously simulated ones included.
    pub bouts: Vec<Bout>,
    pub summary: EventSummary,
}

pub struct EventSimulator<'a> {
    fighters: &'a dyn FighterRepository,
    events: &'a dyn EventStore,
    model: Option<&'a dyn WinModel>,
    updated_by: String,
}

impl<'a> EventSimulator<'a> {
    pub fn new(
        fighters: &'a dyn FighterRepository,
        events: &'a dyn EventStore,
        model: Option<&'a dyn WinModel>,
    ) -> Self {
        Self { fighters, events, model, updated_by: "system".to_string() }
    }

    pub fn updated_by(mut self, who: impl Into<String>) -> Self {
        self.updated_by = who.into();
        self
    }

    /// Simulate every unresolved bout of the event in fight order, then
    /// commit all bout mutations plus the event's completion as one batch.
    pub fn simulate_event(
        &self,
        event_id: Uuid,
        rng: &mut Rng,
    ) -> Result<EventSimulationReport, SimError> {
        let mut event = self
            .events
            .event(event_id)
            .ok_or_else(|| SimError::NotFound("event".to_string()))?;

        if event.status == EventStatus::Completed {
            return Err(SimError::BusinessRule("event already simulated".to_string()));
        }

        let mut bouts = self.events.bouts_for_event(event_id);
        if bouts.is_empty() {
            return Err(SimError::BusinessRule("event has no fights to simulate".to_string()));
        }
        bouts.sort_by_key(|bout| bout.fight_order);

        // The staged working set is ours alone until the commit below; no
        // other caller can observe a half-simulated card.
        for bout in &mut bouts {
            if bout.status == BoutStatus::Simulated {
                continue;
            }
            self.simulate_bout(bout, rng)?;
        }

        event.status = EventStatus::Completed;
        event.updated_at = Utc::now();
        event.updated_by = self.updated_by.clone();

        let summary = summarize(&bouts);
        self.events.commit_event(event.clone(), bouts.clone())?;
        info!(
            event = %event.id,
            fights = summary.total_fights,
            finish_rate = summary.finish_rate,
            "event simulation committed"
        );

        Ok(EventSimulationReport {
            event_id: event.id,
            event_name: event.name,
            bouts,
            summary,
        })
    }

    fn simulate_bout(&self, bout: &mut Bout, rng: &mut Rng) -> Result<(), SimError> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&bout.rounds) {
            return Err(SimError::BusinessRule(format!(
                "bout {} has invalid round count {}",
                bout.id, bout.rounds
            )));
        }

        let fighter1 = self
            .fighters
            .fighter(bout.fighter1_id)
            .ok_or_else(|| SimError::NotFound("fighter 1".to_string()))?;
        let fighter2 = self
            .fighters
            .fighter(bout.fighter2_id)
            .ok_or_else(|| SimError::NotFound("fighter 2".to_string()))?;

        let computation = run_fight(self.model, &fighter1, &fighter2, bout.rounds, rng);

        bout.winner_id = Some(computation.winner_id);
        bout.result_type = Some(computation.result_type);
        bout.finish_round = computation.finish_round;
        bout.finish_time = computation.finish_time;
        bout.fighter1_probability = Some(computation.probability.fighter1);
        bout.fighter2_probability = Some(computation.probability.fighter2);
        bout.detail = Some(computation.detail);
        bout.status = BoutStatus::Simulated;
        bout.updated_at = Utc::now();
        bout.updated_by = self.updated_by.clone();
        Ok(())
    }
}

fn summarize(bouts: &[Bout]) -> EventSummary {
    let mut knockouts = 0;
    let mut submissions = 0;
    let mut decisions = 0;
    for bout in bouts {
        match bout.result_type {
            Some(ResultType::Ko) => knockouts += 1,
            Some(ResultType::Submission) => submissions += 1,
            Some(ResultType::Decision) => decisions += 1,
            _ => {}
        }
    }
    let total = bouts.len() as u32;
    let finish_rate = if total == 0 {
        0.0
    } else {
        round2(f64::from(knockouts + submissions) / f64::from(total) * 100.0)
    };
    EventSummary {
        total_fights: total,
        knockouts,
        submissions,
        decisions,
        finish_rate,
    }
}
