//! Single-round simulation: bounded stochastic scoring plus narrative events.
//!
//! Round flavor always runs on the gamified attributes, even when the win
//! probability upstream came from the trained model. The two attribute
//! families intentionally stay independent.

use serde::{Deserialize, Serialize};

use crate::data::fighter::Fighter;

use super::rng::Rng;
use super::round2;

/// Point gap beyond which the round reads as dominated.
pub const DOMINANCE_GAP: f64 = 20.0;
/// Chance of one special narrative event per round.
pub const SPECIAL_EVENT_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: u32,
    pub fighter1_points: f64,
    pub fighter2_points: f64,
    pub dominant_fighter: String,
    pub events: Vec<String>,
}

/// Simulate one round. One shared jitter factor in `[0.9, 1.1)` scales both
/// fighters' combined striking+grappling power, so the spread between them is
/// bounded by their attributes, not by luck.
pub fn simulate_round(
    fighter1: &Fighter,
    fighter2: &Fighter,
    round_number: u32,
    rng: &mut Rng,
) -> RoundResult {
    let jitter = rng.uniform(0.9, 1.1);
    let fighter1_points = round2((fighter1.striking_power() + fighter1.grappling_power()) * jitter);
    let fighter2_points = round2((fighter2.striking_power() + fighter2.grappling_power()) * jitter);

    // Ties read as fighter1's round.
    let dominant = if fighter1_points >= fighter2_points { &fighter1.name } else { &fighter2.name };

    let mut events = Vec::new();
    if (fighter1_points - fighter2_points).abs() > DOMINANCE_GAP {
        events.push(format!("{dominant} dominated the round"));
    }

    if rng.next_f64() < SPECIAL_EVENT_CHANCE {
        let event = match rng.range_u32(0, 2) {
            0 => format!("{dominant} landed a takedown"),
            1 => format!("{dominant} landed a significant strike"),
            _ => format!("{dominant} attempted a submission"),
        };
        events.push(event);
    }

    RoundResult {
        round_number,
        fighter1_points,
        fighter2_points,
        dominant_fighter: dominant.clone(),
        events,
    }
}
