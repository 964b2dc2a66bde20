use fightcard::data::Fighter;
use fightcard::error::SimError;
use fightcard::sim::{FightSimulator, ResultType, Rng};
use fightcard::store::MemoryStore;
use uuid::Uuid;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a}");
}

fn seeded_store() -> (MemoryStore, Uuid, Uuid) {
    let a = Fighter::gamified("Aline Prado", [80.0; 6]);
    let b = Fighter::gamified("Bruna Costa", [60.0; 6]);
    let (id_a, id_b) = (a.id, b.id);
    (MemoryStore::with_fighters([a, b]), id_a, id_b)
}

#[test]
fn fixed_seed_reproduces_rounds_and_winner() {
    let (store, id_a, id_b) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None);

    let first = simulator.simulate(id_a, id_b, 3, None, &mut Rng::new(7)).unwrap();
    let second = simulator.simulate(id_a, id_b, 3, None, &mut Rng::new(7)).unwrap();

    assert_eq!(first.detail, second.detail);
    assert_eq!(first.winner_id, second.winner_id);
    assert_eq!(first.result_type, second.result_type);
    assert_eq!(first.finish_round, second.finish_round);
    assert_eq!(first.finish_time, second.finish_time);
    assert_eq!(first.detail.rounds.len(), 3);
}

#[test]
fn winner_has_the_higher_point_total() {
    let (store, id_a, id_b) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None);

    for seed in 0..50 {
        let outcome = simulator.simulate(id_a, id_b, 3, None, &mut Rng::new(seed)).unwrap();
        let totals = &outcome.detail.total_points;
        // The stronger profile scores more under the shared jitter, every time.
        assert!(totals.fighter1 > totals.fighter2);
        assert_eq!(outcome.winner_id, id_a);

        let accumulated: f64 =
            outcome.detail.rounds.iter().map(|r| r.fighter1_points).sum();
        approx_eq(totals.fighter1, accumulated, 0.01);
    }
}

#[test]
fn probabilities_are_attached_and_sum_to_one_hundred() {
    let (store, id_a, id_b) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None);
    let outcome = simulator.simulate(id_a, id_b, 3, None, &mut Rng::new(1)).unwrap();
    approx_eq(outcome.fighter1_probability + outcome.fighter2_probability, 100.0, 0.01);
    approx_eq(outcome.fighter1_probability, 57.14, 1e-9);
}

#[test]
fn finish_round_stays_within_requested_rounds() {
    let (store, id_a, id_b) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None);

    for seed in 0..300 {
        let rounds = 1 + (seed % 5) as u32;
        let outcome =
            simulator.simulate(id_a, id_b, rounds, None, &mut Rng::new(seed)).unwrap();
        match outcome.result_type {
            ResultType::Decision => {
                assert!(outcome.finish_round.is_none());
                assert!(outcome.finish_time.is_none());
            }
            ResultType::Ko | ResultType::Submission => {
                let finish = outcome.finish_round.expect("finish round");
                assert!(
                    (1..=rounds).contains(&finish),
                    "finish round {finish} outside 1..={rounds}"
                );
                assert!(outcome.finish_time.is_some());
            }
            ResultType::Draw => panic!("simulator produced a draw"),
        }
    }
}

#[test]
fn self_fight_is_rejected_without_persistence() {
    let (store, id_a, _) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None);

    let err = simulator.simulate(id_a, id_a, 3, None, &mut Rng::new(1)).unwrap_err();
    assert!(matches!(err, SimError::BusinessRule(_)), "got {err:?}");
    assert!(store.recorded_fights().is_empty());
}

#[test]
fn unknown_fighter_is_not_found() {
    let (store, id_a, _) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None);

    let err = simulator.simulate(id_a, Uuid::new_v4(), 3, None, &mut Rng::new(1)).unwrap_err();
    assert!(matches!(err, SimError::NotFound(_)), "got {err:?}");
    assert!(store.recorded_fights().is_empty());
}

#[test]
fn soft_deleted_fighter_is_not_found() {
    let mut ghost = Fighter::gamified("Ghost", [70.0; 6]);
    ghost.deleted = true;
    let ghost_id = ghost.id;
    let live = Fighter::gamified("Live", [70.0; 6]);
    let live_id = live.id;
    let store = MemoryStore::with_fighters([ghost, live]);
    let simulator = FightSimulator::new(&store, &store, None);

    let err = simulator.simulate(live_id, ghost_id, 3, None, &mut Rng::new(1)).unwrap_err();
    assert!(matches!(err, SimError::NotFound(_)), "got {err:?}");
}

#[test]
fn round_count_outside_one_to_five_is_rejected() {
    let (store, id_a, id_b) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None);

    for rounds in [0, 6, 12] {
        let err = simulator.simulate(id_a, id_b, rounds, None, &mut Rng::new(1)).unwrap_err();
        assert!(matches!(err, SimError::BusinessRule(_)), "rounds {rounds}: {err:?}");
    }
    assert!(store.recorded_fights().is_empty());
}

#[test]
fn successful_fight_is_recorded_once() {
    let (store, id_a, id_b) = seeded_store();
    let simulator = FightSimulator::new(&store, &store, None).created_by("tester");

    let outcome = simulator
        .simulate(id_a, id_b, 5, Some("main event rematch"), &mut Rng::new(42))
        .unwrap();

    let recorded = store.recorded_fights();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], outcome);
    assert_eq!(recorded[0].created_by, "tester");
    assert_eq!(recorded[0].notes.as_deref(), Some("main event rematch"));
    assert_eq!(recorded[0].rounds, 5);
}
