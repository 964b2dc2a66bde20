//! Full-bout orchestration: probability estimate, round loop, finish
//! classification, result assembly, immediate persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::data::fighter::Fighter;
use crate::error::SimError;
use crate::model::WinModel;
use crate::store::{FighterRepository, SimulationStore};

use super::outcome::{classify, FinishTime, ResultType};
use super::probability::{win_probability, EstimatePath, WinProbability};
use super::rng::Rng;
use super::round::{simulate_round, RoundResult};
use super::round2;

pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalPoints {
    pub fighter1: f64,
    pub fighter2: f64,
}

/// Per-round narrative plus cumulative totals, persisted as the bout's
/// detail payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDetail {
    pub rounds: Vec<RoundResult>,
    pub total_points: TotalPoints,
}

/// A completed standalone fight, ready for persistence. Immutable once
/// recorded (soft deletion happens outside the engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightOutcome {
    pub id: Uuid,
    pub fighter1_id: Uuid,
    pub fighter2_id: Uuid,
    pub winner_id: Uuid,
    pub result_type: ResultType,
    pub rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<FinishTime>,
    pub fighter1_probability: f64,
    pub fighter2_probability: f64,
    pub probability_path: EstimatePath,
    pub detail: SimulationDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Everything one fight computation produces before it is attached to a
/// record. Shared between standalone fights and event cards.
#[derive(Debug, Clone)]
pub(crate) struct FightComputation {
    pub winner_id: Uuid,
    pub result_type: ResultType,
    pub finish_round: Option<u32>,
    pub finish_time: Option<FinishTime>,
    pub probability: WinProbability,
    pub detail: SimulationDetail,
}

/// The core fight steps: one probability estimate, `rounds` simulated rounds
/// with accumulating totals, one finish classification. The winner is the
/// strictly higher point total; an exact tie goes to fighter2.
pub(crate) fn run_fight(
    model: Option<&dyn WinModel>,
    fighter1: &Fighter,
    fighter2: &Fighter,
    rounds: u32,
    rng: &mut Rng,
) -> FightComputation {
    let probability = win_probability(model, fighter1, fighter2);

    let mut round_results = Vec::with_capacity(rounds as usize);
    let mut total1 = 0.0;
    let mut total2 = 0.0;
    for round_number in 1..=rounds {
        let round = simulate_round(fighter1, fighter2, round_number, rng);
        total1 += round.fighter1_points;
        total2 += round.fighter2_points;
        round_results.push(round);
    }

    let winner_id = if total1 > total2 { fighter1.id } else { fighter2.id };

    let classified = classify(fighter1, fighter2, rounds, rng);

    FightComputation {
        winner_id,
        result_type: classified.result_type,
        finish_round: classified.finish_round,
        finish_time: classified.finish_time,
        probability,
        detail: SimulationDetail {
            rounds: round_results,
            total_points: TotalPoints { fighter1: round2(total1), fighter2: round2(total2) },
        },
    }
}

pub struct FightSimulator<'a> {
    fighters: &'a dyn FighterRepository,
    store: &'a dyn SimulationStore,
    model: Option<&'a dyn WinModel>,
    created_by: String,
}

impl<'a> FightSimulator<'a> {
    pub fn new(
        fighters: &'a dyn FighterRepository,
        store: &'a dyn SimulationStore,
        model: Option<&'a dyn WinModel>,
    ) -> Self {
        Self { fighters, store, model, created_by: "system".to_string() }
    }

    pub fn created_by(mut self, who: impl Into<String>) -> Self {
        self.created_by = who.into();
        self
    }

    pub(crate) fn resolve(&self, id: Uuid, label: &str) -> Result<Fighter, SimError> {
        self.fighters.fighter(id).ok_or_else(|| SimError::NotFound(label.to_string()))
    }

    /// Simulate one standalone fight and record it in its own commit.
    pub fn simulate(
        &self,
        fighter1_id: Uuid,
        fighter2_id: Uuid,
        rounds: u32,
        notes: Option<&str>,
        rng: &mut Rng,
    ) -> Result<FightOutcome, SimError> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
            return Err(SimError::BusinessRule(format!(
                "rounds must be between {MIN_ROUNDS} and {MAX_ROUNDS}, got {rounds}"
            )));
        }

        let fighter1 = self.resolve(fighter1_id, "fighter 1")?;
        let fighter2 = self.resolve(fighter2_id, "fighter 2")?;

        if fighter1_id == fighter2_id {
            return Err(SimError::BusinessRule(
                "cannot simulate a fight between the same fighter".to_string(),
            ));
        }

        let computation = run_fight(self.model, &fighter1, &fighter2, rounds, rng);
        let outcome = FightOutcome {
            id: Uuid::new_v4(),
            fighter1_id,
            fighter2_id,
            winner_id: computation.winner_id,
            result_type: computation.result_type,
            rounds,
            finish_round: computation.finish_round,
            finish_time: computation.finish_time,
            fighter1_probability: computation.probability.fighter1,
            fighter2_probability: computation.probability.fighter2,
            probability_path: computation.probability.path,
            detail: computation.detail,
            notes: notes.map(str::to_string),
            created_at: Utc::now(),
            created_by: self.created_by.clone(),
        };

        self.store.record_fight(&outcome)?;
        info!(
            fight = %outcome.id,
            winner = %outcome.winner_id,
            result = %outcome.result_type,
            "fight simulated"
        );
        Ok(outcome)
    }

    pub(crate) fn model(&self) -> Option<&'a dyn WinModel> {
        self.model
    }
}
