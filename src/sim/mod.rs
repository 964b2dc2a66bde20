pub mod analysis;
pub mod event;
pub mod fight;
pub mod montecarlo;
pub mod outcome;
pub mod probability;
pub mod rng;
pub mod round;

pub use analysis::{
    compare_fighters, predict_matchup, AttributeComparison, FighterCard, FighterComparison,
    MatchupPrediction,
};
pub use event::{EventSimulationReport, EventSimulator, EventSummary};
pub use fight::{
    FightOutcome, FightSimulator, SimulationDetail, TotalPoints, MAX_ROUNDS, MIN_ROUNDS,
};
pub use montecarlo::{estimate_matchup, estimate_matchup_parallel, MatchupEstimate};
pub use outcome::{
    classify, finish_probabilities, Classified, FinishProbabilities, FinishTime, ResultType,
    KO_BASE_PROB, KO_MAX_PROB, SUBMISSION_BASE_PROB, SUBMISSION_MAX_PROB,
};
pub use probability::{win_probability, EstimatePath, WinProbability};
pub use rng::Rng;
pub use round::{simulate_round, RoundResult, DOMINANCE_GAP, SPECIAL_EVENT_CHANCE};

/// Scores and probabilities are carried as percentages rounded to two
/// decimals, matching the persisted representation.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(57.142857), 57.14);
        assert_eq!(round2(42.857142), 42.86);
        assert_eq!(round2(100.004), 100.0);
    }
}
