//! Model-serving collaborator: trained win classifier behind a narrow trait.
//!
//! The engine only ever sends signed feature differentials and receives a
//! class-1 probability ("fighter1 wins") in `[0, 1]`. Unavailability is a
//! valid, expected outcome; the probability estimator falls back to the
//! attribute heuristic and nothing propagates to orchestrators.

pub mod loader;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::fighter::Fighter;

pub use loader::{load_model, LogisticModel, ModelLoadError, DEFAULT_MODEL_PATH};

/// The model or its serving layer could not produce a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelUnavailable;

impl fmt::Display for ModelUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win model unavailable")
    }
}

impl std::error::Error for ModelUnavailable {}

/// The 11 signed differentials the trained classifier expects, always
/// `fighter1 - fighter2`. Missing profile values substitute 0.0 before
/// subtracting; that precision loss is deliberate and matches the model's
/// training pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureDiffs {
    pub height_diff: f64,
    pub weight_diff: f64,
    pub reach_diff: f64,
    pub slpm_diff: f64,
    pub sapm_diff: f64,
    pub td_def_diff: f64,
    pub td_avg_diff: f64,
    pub sub_avg_diff: f64,
    pub str_acc_diff: f64,
    pub wins_diff: f64,
    pub losses_diff: f64,
}

fn diff(a: Option<f64>, b: Option<f64>) -> f64 {
    a.unwrap_or(0.0) - b.unwrap_or(0.0)
}

impl FeatureDiffs {
    pub fn between(fighter1: &Fighter, fighter2: &Fighter) -> Self {
        Self {
            height_diff: diff(fighter1.height_cm, fighter2.height_cm),
            weight_diff: diff(fighter1.weight_lbs, fighter2.weight_lbs),
            reach_diff: diff(fighter1.reach_cm, fighter2.reach_cm),
            slpm_diff: diff(fighter1.slpm, fighter2.slpm),
            sapm_diff: diff(fighter1.sapm, fighter2.sapm),
            td_def_diff: diff(fighter1.td_def, fighter2.td_def),
            td_avg_diff: diff(fighter1.td_avg, fighter2.td_avg),
            sub_avg_diff: diff(fighter1.sub_avg, fighter2.sub_avg),
            str_acc_diff: diff(fighter1.str_acc, fighter2.str_acc),
            wins_diff: f64::from(fighter1.wins) - f64::from(fighter2.wins),
            losses_diff: f64::from(fighter1.losses) - f64::from(fighter2.losses),
        }
    }

    /// Feature vector in the exact column order the classifier was trained on.
    pub fn as_array(&self) -> [f64; 11] {
        [
            self.height_diff,
            self.weight_diff,
            self.reach_diff,
            self.slpm_diff,
            self.sapm_diff,
            self.td_def_diff,
            self.td_avg_diff,
            self.sub_avg_diff,
            self.str_acc_diff,
            self.wins_diff,
            self.losses_diff,
        ]
    }
}

/// Trained win classifier. Implementations must keep the probability in
/// `[0, 1]` and report any internal failure as [`ModelUnavailable`] rather
/// than panicking.
pub trait WinModel {
    fn predict(&self, diffs: &FeatureDiffs) -> Result<f64, ModelUnavailable>;
}
