//! Integration tests for the engine.
//!
//! These tests drive the standard registry with long, randomly generated hand
//! histories and check the properties every session must satisfy.

#[cfg(test)]
mod tests {
    use crate::shoe::{Shoe, DEFAULT_DECKS};
    use crate::strategy::Progression;
    use crate::{Engine, Registry};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use tally_types::{Outcome, Prediction, Snapshot};

    const SEEDS: u64 = 16;
    const HANDS: usize = 300;

    /// Outcomes drawn from a real shoe so ties appear at a realistic rate.
    fn shoe_outcomes(seed: u64, hands: usize) -> Vec<Outcome> {
        Shoe::new(StdRng::seed_from_u64(seed), DEFAULT_DECKS)
            .take(hands)
            .collect()
    }

    fn play(outcomes: &[Outcome]) -> Engine {
        let mut engine = Engine::default();
        for &outcome in outcomes {
            engine.record(outcome);
        }
        engine
    }

    /// Everything in a snapshot except the hand count and tallies.
    fn strategy_view(snapshot: &Snapshot) -> Vec<(u32, u32, u32, u32, u32, u32, Prediction)> {
        snapshot
            .strategies
            .iter()
            .map(|s| {
                (
                    s.wins,
                    s.losses,
                    s.max_win_streak,
                    s.max_loss_streak,
                    s.current_win_streak,
                    s.current_loss_streak,
                    s.prediction,
                )
            })
            .collect()
    }

    #[test]
    fn test_incremental_matches_replay() {
        for seed in 0..SEEDS {
            let outcomes = shoe_outcomes(seed, HANDS);
            let incremental = play(&outcomes);
            let replayed = Engine::replay(Registry::standard(), outcomes.iter().copied());
            assert_eq!(incremental, replayed, "seed {seed}");
        }
    }

    #[test]
    fn test_undo_inverts_record() {
        for seed in 0..SEEDS {
            let outcomes = shoe_outcomes(seed, HANDS);
            let mut engine = Engine::default();
            for &outcome in &outcomes {
                let before = engine.clone();
                engine.record(outcome);
                let mut undone = engine.clone();
                undone.undo_last();
                assert_eq!(undone, before, "seed {seed}");
            }
        }
    }

    #[test]
    fn test_undo_matches_replay_of_prefix() {
        let outcomes = shoe_outcomes(99, HANDS);
        let mut engine = play(&outcomes);
        for len in (0..outcomes.len()).rev() {
            engine.undo_last();
            if len % 37 == 0 {
                let expected = Engine::replay(Registry::standard(), outcomes[..len].to_vec());
                assert_eq!(engine, expected, "prefix {len}");
            }
        }
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_ties_never_change_strategies() {
        let mut rng = StdRng::seed_from_u64(7);
        for seed in 0..SEEDS {
            let outcomes = shoe_outcomes(seed, 120);
            let mut engine = Engine::default();
            for &outcome in &outcomes {
                engine.record(outcome);
                if rng.gen_bool(0.25) {
                    let before = engine.snapshot();
                    let after = engine.record(Outcome::Tie);
                    assert_eq!(strategy_view(&after), strategy_view(&before));
                    assert_eq!(after.tallies.tie, before.tallies.tie + 1);
                    assert_eq!(after.hands, before.hands + 1);
                }
            }
        }
    }

    #[test]
    fn test_tie_free_history_gives_same_strategies() {
        let outcomes = shoe_outcomes(3, HANDS);
        let decided: Vec<Outcome> = outcomes
            .iter()
            .copied()
            .filter(|outcome| outcome.is_decided())
            .collect();
        assert!(decided.len() < outcomes.len());
        assert_eq!(
            strategy_view(&play(&outcomes).snapshot()),
            strategy_view(&play(&decided).snapshot())
        );
    }

    #[test]
    fn test_reset_matches_fresh_engine() {
        for seed in 0..4 {
            let mut engine = play(&shoe_outcomes(seed, HANDS));
            engine.reset_all();
            assert_eq!(engine, Engine::default());
            engine.reset_all();
            assert_eq!(engine, Engine::default());
        }
    }

    #[test]
    fn test_snapshot_invariants() {
        for seed in 0..SEEDS {
            let mut engine = Engine::default();
            for outcome in shoe_outcomes(seed, HANDS) {
                let snapshot = engine.record(outcome);
                assert_eq!(snapshot.tallies.total() as usize, snapshot.hands);
                for stats in &snapshot.strategies {
                    assert!(stats.current_win_streak == 0 || stats.current_loss_streak == 0);
                    assert!(stats.max_win_streak >= stats.current_win_streak);
                    assert!(stats.max_loss_streak >= stats.current_loss_streak);
                    let decided = snapshot.tallies.player + snapshot.tallies.banker;
                    assert!(((stats.wins + stats.losses) as usize) <= decided as usize);
                    if stats.wins + stats.losses > 0 {
                        // Both rates round half-up, so the sum may overshoot by one.
                        let sum = stats.win_rate.basis_points() + stats.loss_rate.basis_points();
                        assert!((10_000..=10_001).contains(&sum));
                    }
                    assert_ne!(stats.prediction, Prediction::Guess(Outcome::Tie));
                }
            }
        }
    }

    #[test]
    fn test_prediction_is_pure() {
        let engine = play(&shoe_outcomes(11, 50));
        let registry = engine.registry().clone();
        for (name, strategy) in registry.iter() {
            let first = strategy.predict();
            assert_eq!(strategy.predict(), first, "{name}");
        }
        assert_eq!(engine.registry(), &registry);
    }
}
