use fightcard::data::Fighter;
use fightcard::error::SimError;
use fightcard::sim::{
    compare_fighters, estimate_matchup, estimate_matchup_parallel, predict_matchup,
    EstimatePath, FightSimulator,
};
use fightcard::store::MemoryStore;
use uuid::Uuid;

fn lopsided_pair() -> (Fighter, Fighter) {
    let mut champ = Fighter::gamified("Champ", [90.0, 85.0, 80.0, 88.0, 86.0, 92.0]);
    champ.wins = 20;
    champ.losses = 1;
    let contender = Fighter::gamified("Contender", [60.0, 55.0, 58.0, 52.0, 57.0, 50.0]);
    (champ, contender)
}

#[test]
fn prediction_names_the_clear_favorite() {
    let (champ, contender) = lopsided_pair();
    let prediction = predict_matchup(None, &champ, &contender);

    assert_eq!(prediction.probability_path, EstimatePath::Heuristic);
    assert!(prediction.fighter1_win_probability > 60.0);
    assert_eq!(prediction.overall_advantage, "Champ");
    assert_eq!(prediction.striking_advantage, "Champ");
    assert_eq!(prediction.grappling_advantage, "Champ");
    assert!(prediction.analysis.contains("Champ is the clear favorite"));
    assert!(prediction.analysis.contains("significant striking advantage"));
    assert!(prediction.analysis.contains("significant grappling advantage"));
    assert_eq!(prediction.draw_probability, 0.0);

    let finish_sum = prediction.ko_probability
        + prediction.submission_probability
        + prediction.decision_probability;
    assert!((finish_sum - 100.0).abs() <= 0.01);
}

#[test]
fn even_matchup_reads_as_open() {
    let a = Fighter::gamified("A", [70.0; 6]);
    let b = Fighter::gamified("B", [70.0; 6]);
    let prediction = predict_matchup(None, &a, &b);
    assert!(prediction.analysis.contains("evenly matched"));
    assert!(!prediction.analysis.contains("significant"));
}

#[test]
fn key_factors_flag_cardio_and_fight_iq() {
    let (champ, contender) = lopsided_pair();
    // stamina 88 > 80 and strategy 92 > 85, both held by Champ.
    let prediction = predict_matchup(None, &champ, &contender);
    assert_eq!(prediction.key_factors.len(), 2);
    assert!(prediction.key_factors[0].contains("Champ"));
    assert!(prediction.key_factors[0].contains("cardio"));
    assert!(prediction.key_factors[1].contains("fight IQ"));
}

#[test]
fn comparison_reports_per_attribute_advantages() {
    let (champ, contender) = lopsided_pair();
    let comparison = compare_fighters(&champ, &contender);

    assert_eq!(comparison.fighter1.record, "20-1-0");
    assert_eq!(comparison.striking.advantage, "Champ");
    assert_eq!(comparison.striking.diff, 30.0);
    assert_eq!(comparison.strategy.advantage, "Champ");
    assert_eq!(comparison.overall.advantage, "Champ");
    assert!(comparison.overall.fighter1 > comparison.overall.fighter2);
}

#[test]
fn simulator_resolves_ids_before_analysis() {
    let (champ, contender) = lopsided_pair();
    let (champ_id, contender_id) = (champ.id, contender.id);
    let store = MemoryStore::with_fighters([champ, contender]);
    let simulator = FightSimulator::new(&store, &store, None);

    let prediction = simulator.predict(champ_id, contender_id).unwrap();
    assert_eq!(prediction.fighter1_id, champ_id);

    let err = simulator.predict(champ_id, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, SimError::NotFound(_)));

    let comparison = simulator.compare(champ_id, contender_id).unwrap();
    assert_eq!(comparison.fighter2.name, "Contender");
}

#[test]
fn monte_carlo_favors_the_stronger_fighter() {
    let (champ, contender) = lopsided_pair();
    let estimate = estimate_matchup(None, &champ, &contender, 3, 500, 11);

    assert_eq!(estimate.iterations, 500);
    // The stronger profile outscores every round under shared jitter.
    assert_eq!(estimate.fighter1_win_rate, 100.0);
    assert_eq!(estimate.fighter2_win_rate, 0.0);
    assert!(estimate.avg_fighter1_points > estimate.avg_fighter2_points);

    let finish_sum = estimate.ko_rate + estimate.submission_rate + estimate.decision_rate;
    assert!((finish_sum - 100.0).abs() <= 0.05, "finish rates sum to {finish_sum}");
}

#[test]
fn parallel_estimate_matches_sequential_counts() {
    let (champ, contender) = lopsided_pair();
    let sequential = estimate_matchup(None, &champ, &contender, 3, 400, 23);
    let parallel = estimate_matchup_parallel(None, &champ, &contender, 3, 400, 23);

    assert_eq!(sequential.fighter1_win_rate, parallel.fighter1_win_rate);
    assert_eq!(sequential.ko_rate, parallel.ko_rate);
    assert_eq!(sequential.submission_rate, parallel.submission_rate);
    assert_eq!(sequential.decision_rate, parallel.decision_rate);
}

#[test]
fn zero_iterations_yield_an_empty_estimate() {
    let (champ, contender) = lopsided_pair();
    let estimate = estimate_matchup(None, &champ, &contender, 3, 0, 1);
    assert_eq!(estimate.iterations, 0);
    assert_eq!(estimate.fighter1_win_rate, 0.0);
}
