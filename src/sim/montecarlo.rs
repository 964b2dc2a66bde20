//! Monte Carlo matchup estimation: run the same fight many times under
//! derived seeds and report empirical rates. Offline analytics only; event
//! cards never use this.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::fighter::Fighter;
use crate::model::WinModel;

use super::fight::run_fight;
use super::outcome::ResultType;
use super::rng::Rng;
use super::round2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchupEstimate {
    pub iterations: u32,
    pub fighter1_win_rate: f64,
    pub fighter2_win_rate: f64,
    pub ko_rate: f64,
    pub submission_rate: f64,
    pub decision_rate: f64,
    pub avg_fighter1_points: f64,
    pub avg_fighter2_points: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    fighter1_wins: u32,
    knockouts: u32,
    submissions: u32,
    decisions: u32,
    fighter1_points: f64,
    fighter2_points: f64,
}

impl Tally {
    fn merge(mut self, other: Tally) -> Tally {
        self.fighter1_wins += other.fighter1_wins;
        self.knockouts += other.knockouts;
        self.submissions += other.submissions;
        self.decisions += other.decisions;
        self.fighter1_points += other.fighter1_points;
        self.fighter2_points += other.fighter2_points;
        self
    }
}

fn run_iteration(
    model: Option<&dyn WinModel>,
    fighter1: &Fighter,
    fighter2: &Fighter,
    rounds: u32,
    iteration_seed: u64,
) -> Tally {
    let mut rng = Rng::new(iteration_seed);
    let computation = run_fight(model, fighter1, fighter2, rounds, &mut rng);

    let mut tally = Tally::default();
    if computation.winner_id == fighter1.id {
        tally.fighter1_wins = 1;
    }
    match computation.result_type {
        ResultType::Ko => tally.knockouts = 1,
        ResultType::Submission => tally.submissions = 1,
        ResultType::Decision => tally.decisions = 1,
        ResultType::Draw => {}
    }
    tally.fighter1_points = computation.detail.total_points.fighter1;
    tally.fighter2_points = computation.detail.total_points.fighter2;
    tally
}

fn estimate_from_tally(tally: Tally, iterations: u32) -> MatchupEstimate {
    if iterations == 0 {
        return MatchupEstimate {
            iterations: 0,
            fighter1_win_rate: 0.0,
            fighter2_win_rate: 0.0,
            ko_rate: 0.0,
            submission_rate: 0.0,
            decision_rate: 0.0,
            avg_fighter1_points: 0.0,
            avg_fighter2_points: 0.0,
        };
    }
    let n = f64::from(iterations);
    let rate = |count: u32| round2(f64::from(count) / n * 100.0);
    MatchupEstimate {
        iterations,
        fighter1_win_rate: rate(tally.fighter1_wins),
        fighter2_win_rate: rate(iterations - tally.fighter1_wins),
        ko_rate: rate(tally.knockouts),
        submission_rate: rate(tally.submissions),
        decision_rate: rate(tally.decisions),
        avg_fighter1_points: round2(tally.fighter1_points / n),
        avg_fighter2_points: round2(tally.fighter2_points / n),
    }
}

/// Sequential estimate. Iteration seeds derive from `seed` by offset, so the
/// whole run reproduces from one number.
pub fn estimate_matchup(
    model: Option<&dyn WinModel>,
    fighter1: &Fighter,
    fighter2: &Fighter,
    rounds: u32,
    iterations: u32,
    seed: u64,
) -> MatchupEstimate {
    let tally = (0..iterations)
        .map(|i| run_iteration(model, fighter1, fighter2, rounds, seed.wrapping_add(u64::from(i))))
        .fold(Tally::default(), Tally::merge);
    estimate_from_tally(tally, iterations)
}

/// Like [`estimate_matchup`] but spread across CPU cores. Per-iteration seeds
/// are identical to the sequential run, so win and finish counts match it
/// exactly; the point averages may differ below rounding precision because
/// float summation order is not fixed.
pub fn estimate_matchup_parallel(
    model: Option<&(dyn WinModel + Sync)>,
    fighter1: &Fighter,
    fighter2: &Fighter,
    rounds: u32,
    iterations: u32,
    seed: u64,
) -> MatchupEstimate {
    let tally = (0..iterations)
        .into_par_iter()
        .map(|i| {
            run_iteration(
                model.map(|m| m as &dyn WinModel),
                fighter1,
                fighter2,
                rounds,
                seed.wrapping_add(u64::from(i)),
            )
        })
        .reduce(Tally::default, Tally::merge);
    estimate_from_tally(tally, iterations)
}
