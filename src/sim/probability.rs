//! Win-probability estimation: learned model first, attribute heuristic as
//! fallback. Always returns a pair of percentages summing to 100 (within
//! 0.01 from rounding); never errors.

use tracing::{info, warn};

use crate::data::fighter::Fighter;
use crate::model::{FeatureDiffs, WinModel};

use super::round2;

/// Cap of the record-quality bonus, reached at a perfect win ratio.
const RECORD_BONUS_MAX: f64 = 5.0;

/// Which estimation path produced the pair. Explicit so callers and tests can
/// assert the path without scraping logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EstimatePath {
    Model,
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinProbability {
    pub path: EstimatePath,
    /// Percentage for fighter1, rounded to two decimals.
    pub fighter1: f64,
    /// Percentage for fighter2, rounded to two decimals.
    pub fighter2: f64,
}

/// Estimate the win-probability pair for `fighter1` vs `fighter2`.
///
/// With a model present and answering, the class-1 probability maps straight
/// to percentages. Any model failure (including `None` for "no model loaded")
/// drops to the gamified-attribute heuristic: each fighter's share of summed
/// overall power, plus up to [`RECORD_BONUS_MAX`] points scaled by career win
/// ratio, renormalized to 100.
pub fn win_probability(
    model: Option<&dyn WinModel>,
    fighter1: &Fighter,
    fighter2: &Fighter,
) -> WinProbability {
    if let Some(model) = model {
        let diffs = FeatureDiffs::between(fighter1, fighter2);
        if let Ok(p) = model.predict(&diffs) {
            let p = p.clamp(0.0, 1.0);
            let prob1 = round2(p * 100.0);
            let prob2 = round2((1.0 - p) * 100.0);
            info!(
                fighter1 = %fighter1.name,
                fighter2 = %fighter2.name,
                prob1,
                prob2,
                "win probability from trained model"
            );
            return WinProbability { path: EstimatePath::Model, fighter1: prob1, fighter2: prob2 };
        }
    }

    warn!(
        fighter1 = %fighter1.name,
        fighter2 = %fighter2.name,
        "win model unavailable, using attribute heuristic"
    );
    heuristic(fighter1, fighter2)
}

fn record_bonus(fighter: &Fighter) -> f64 {
    let total = fighter.wins + fighter.losses;
    if total == 0 {
        return 0.0;
    }
    f64::from(fighter.wins) / f64::from(total) * RECORD_BONUS_MAX
}

fn heuristic(fighter1: &Fighter, fighter2: &Fighter) -> WinProbability {
    let power1 = fighter1.overall_power();
    let power2 = fighter2.overall_power();
    let total_power = power1 + power2;

    let (mut prob1, mut prob2) = if total_power > 0.0 {
        (power1 / total_power * 100.0, power2 / total_power * 100.0)
    } else {
        // Both profiles are all zeros; nothing to separate them.
        (50.0, 50.0)
    };

    prob1 += record_bonus(fighter1);
    prob2 += record_bonus(fighter2);

    let total_prob = prob1 + prob2;
    WinProbability {
        path: EstimatePath::Heuristic,
        fighter1: round2(prob1 / total_prob * 100.0),
        fighter2: round2(prob2 / total_prob * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::model::ModelUnavailable;

    use super::*;

    fn fighter(name: &str, mean: f64) -> Fighter {
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
            striking: mean,
            grappling: mean,
            defense: mean,
            stamina: mean,
            speed: mean,
            strategy: mean,
            wins: 0,
            losses: 0,
            draws: 0,
            deleted: false,
        }
    }

    struct FixedModel(f64);

    impl WinModel for FixedModel {
        fn predict(&self, _diffs: &FeatureDiffs) -> Result<f64, ModelUnavailable> {
            Ok(self.0)
        }
    }

    struct DownModel;

    impl WinModel for DownModel {
        fn predict(&self, _diffs: &FeatureDiffs) -> Result<f64, ModelUnavailable> {
            Err(ModelUnavailable)
        }
    }

    #[test]
    fn model_path_maps_probability_to_percentages() {
        let estimate = win_probability(Some(&FixedModel(0.735)), &fighter("a", 80.0), &fighter("b", 60.0));
        assert_eq!(estimate.path, EstimatePath::Model);
        assert_eq!(estimate.fighter1, 73.5);
        assert_eq!(estimate.fighter2, 26.5);
    }

    #[test]
    fn heuristic_matches_power_shares() {
        let estimate = win_probability(None, &fighter("a", 80.0), &fighter("b", 60.0));
        assert_eq!(estimate.path, EstimatePath::Heuristic);
        assert_eq!(estimate.fighter1, 57.14);
        assert_eq!(estimate.fighter2, 42.86);
    }

    #[test]
    fn failing_model_falls_back_to_heuristic() {
        let estimate = win_probability(Some(&DownModel), &fighter("a", 80.0), &fighter("b", 60.0));
        assert_eq!(estimate.path, EstimatePath::Heuristic);
        assert_eq!(estimate.fighter1, 57.14);
    }

    #[test]
    fn record_bonus_requires_some_fights() {
        let mut seasoned = fighter("a", 70.0);
        seasoned.wins = 10;
        let rookie = fighter("b", 70.0);

        let estimate = win_probability(None, &seasoned, &rookie);
        assert!(estimate.fighter1 > estimate.fighter2, "win ratio should tip even matchups");

        // An undefeated record still counts; only a zero-fight record does not.
        let sum = estimate.fighter1 + estimate.fighter2;
        assert!((sum - 100.0).abs() <= 0.01);
    }

    #[test]
    fn zero_power_profiles_split_evenly() {
        let estimate = win_probability(None, &fighter("a", 0.0), &fighter("b", 0.0));
        assert_eq!(estimate.fighter1, 50.0);
        assert_eq!(estimate.fighter2, 50.0);
    }

    #[test]
    fn out_of_range_model_output_is_clamped() {
        let estimate = win_probability(Some(&FixedModel(1.7)), &fighter("a", 50.0), &fighter("b", 50.0));
        assert_eq!(estimate.fighter1, 100.0);
        assert_eq!(estimate.fighter2, 0.0);
    }
}
