//! Finish-type classification: how a fight ends, never who wins.
//!
//! The winner comes from accumulated round points in the fight orchestrator.
//! Keeping the two independent means a decision's winner tracks the round
//! tally, not the headline probability estimate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::fighter::Fighter;

use super::rng::Rng;
use super::round2;

pub const KO_BASE_PROB: f64 = 30.0;
pub const KO_MAX_PROB: f64 = 50.0;
pub const SUBMISSION_BASE_PROB: f64 = 20.0;
pub const SUBMISSION_MAX_PROB: f64 = 35.0;

/// How a fight ended. `Draw` exists for stored records but the current
/// point tie-breaking never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultType {
    #[serde(rename = "KO")]
    Ko,
    Submission,
    Decision,
    Draw,
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ko => write!(f, "KO"),
            Self::Submission => write!(f, "Submission"),
            Self::Decision => write!(f, "Decision"),
            Self::Draw => write!(f, "Draw"),
        }
    }
}

/// Clock position of a finish within a five-minute round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishTime {
    pub minutes: u32,
    pub seconds: u32,
}

impl fmt::Display for FinishTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Finish-type percentages, summing to 100 within rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishProbabilities {
    pub ko: f64,
    pub submission: f64,
    pub decision: f64,
}

/// Attribute differentials drive the finish likelihoods: a striking mismatch
/// raises the KO chance (30-50), a grappling mismatch the submission chance
/// (20-35), and decisions absorb the remainder.
pub fn finish_probabilities(fighter1: &Fighter, fighter2: &Fighter) -> FinishProbabilities {
    let striking_diff = (fighter1.striking_power() - fighter2.striking_power()).abs();
    let grappling_diff = (fighter1.grappling_power() - fighter2.grappling_power()).abs();

    let ko = (KO_BASE_PROB + striking_diff * 0.5).min(KO_MAX_PROB);
    let submission = (SUBMISSION_BASE_PROB + grappling_diff * 0.3).min(SUBMISSION_MAX_PROB);
    let decision = 100.0 - ko - submission;

    FinishProbabilities {
        ko: round2(ko),
        submission: round2(submission),
        decision: round2(decision),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub result_type: ResultType,
    pub finish_round: Option<u32>,
    pub finish_time: Option<FinishTime>,
}

/// Pick the concrete result type with one uniform draw over the finish-type
/// percentages. KO and submission carry a finish round in `[1, rounds]` and a
/// finish time (minutes 0-4, seconds 10-59); a decision carries neither.
pub fn classify(fighter1: &Fighter, fighter2: &Fighter, rounds: u32, rng: &mut Rng) -> Classified {
    let probs = finish_probabilities(fighter1, fighter2);
    let draw = rng.uniform(0.0, 100.0);

    if draw < probs.ko {
        let (finish_round, finish_time) = roll_finish(rounds, rng);
        Classified {
            result_type: ResultType::Ko,
            finish_round: Some(finish_round),
            finish_time: Some(finish_time),
        }
    } else if draw < probs.ko + probs.submission {
        let (finish_round, finish_time) = roll_finish(rounds, rng);
        Classified {
            result_type: ResultType::Submission,
            finish_round: Some(finish_round),
            finish_time: Some(finish_time),
        }
    } else {
        Classified { result_type: ResultType::Decision, finish_round: None, finish_time: None }
    }
}

fn roll_finish(rounds: u32, rng: &mut Rng) -> (u32, FinishTime) {
    let finish_round = rng.range_u32(1, rounds.max(1));
    let finish_time = FinishTime {
        minutes: rng.range_u32(0, 4),
        seconds: rng.range_u32(10, 59),
    };
    (finish_round, finish_time)
}
