use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rhea::engines::planning::operators::{mutate, select_best};
use rhea::engines::planning::solution::{shift_and_append, Solution};
use rhea::{Environment, Score};

/// Fresh draws start at 1000 so they never collide with generated base values
struct FreshDraws {
    next: u32,
}

impl FreshDraws {
    fn new() -> Self {
        Self { next: 1000 }
    }
}

impl Environment for FreshDraws {
    type Action = u32;

    fn name(&self) -> &str {
        "Fresh Draws"
    }

    fn get_random_action(&mut self, _rng: &mut dyn RngCore) -> u32 {
        self.next += 1;
        self.next
    }

    fn perform_action(&mut self, _action: &u32) -> rhea::Result<()> {
        Ok(())
    }

    fn evaluate_rollout(
        &self,
        solutions: &[Solution<u32>],
        _discount_factor: Option<f64>,
        _ignore_frames: usize,
    ) -> rhea::Result<Vec<Score>> {
        Ok(solutions.iter().map(|s| s.len() as Score).collect())
    }

    fn is_game_over(&self) -> bool {
        false
    }

    fn get_current_score(&self) -> Score {
        0.0
    }
}

fn changed_positions(base: &[u32], mutated: &[u32]) -> usize {
    base.iter().zip(mutated).filter(|(a, b)| a != b).count()
}

proptest! {
    #[test]
    fn shift_and_append_keeps_length_and_tail(
        base in proptest::collection::vec(0u32..1000, 1..32),
        seed in any::<u64>(),
    ) {
        let mut env = FreshDraws::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let shifted = shift_and_append(base.clone(), &mut env, &mut rng);

        prop_assert_eq!(shifted.len(), base.len());
        prop_assert_eq!(&shifted[..base.len() - 1], &base[1..]);
    }

    #[test]
    fn mutation_keeps_length(
        base in proptest::collection::vec(0u32..1000, 1..32),
        probability in 0.0f64..=1.0,
        flip in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut env = FreshDraws::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let mutated = mutate(&base, probability, flip, &mut env, &mut rng);

        prop_assert_eq!(mutated.len(), base.len());
    }

    #[test]
    fn forced_flip_always_changes_something(
        base in proptest::collection::vec(0u32..1000, 1..32),
        seed in any::<u64>(),
    ) {
        let mut env = FreshDraws::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let mutated = mutate(&base, 0.0, true, &mut env, &mut rng);

        prop_assert_eq!(changed_positions(&base, &mutated), 1);
    }

    #[test]
    fn zero_probability_without_flip_is_identity(
        base in proptest::collection::vec(0u32..1000, 0..32),
        seed in any::<u64>(),
    ) {
        let mut env = FreshDraws::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let mutated = mutate(&base, 0.0, false, &mut env, &mut rng);

        prop_assert_eq!(mutated, base);
    }

    #[test]
    fn full_probability_replaces_every_position(
        base in proptest::collection::vec(0u32..1000, 0..32),
        flip in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut env = FreshDraws::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let mutated = mutate(&base, 1.0, flip, &mut env, &mut rng);

        prop_assert_eq!(changed_positions(&base, &mutated), base.len());
    }

    #[test]
    fn select_best_is_first_maximum(
        scores in proptest::collection::vec(-1.0e6f64..1.0e6, 1..64),
    ) {
        let (index, best) = select_best(&scores, scores.len()).unwrap();

        prop_assert!(scores.iter().all(|&s| s <= best));
        prop_assert_eq!(scores[index], best);
        prop_assert!(scores[..index].iter().all(|&s| s < best));
    }
}
