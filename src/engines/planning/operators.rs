use crate::engines::planning::solution::Solution;
use crate::environment::Environment;
use crate::error::{Result, RheaError};
use crate::types::Score;
use rand::{Rng, RngCore};
use std::collections::BTreeSet;

/// Pick the positions of a solution to mutate
///
/// Each index is included independently with `mutation_probability`. With
/// `flip_at_least_one`, one uniformly drawn index is always included.
pub fn mutation_indexes(
    length: usize,
    mutation_probability: f64,
    flip_at_least_one: bool,
    rng: &mut dyn RngCore,
) -> BTreeSet<usize> {
    let mut indexes = BTreeSet::new();
    if length == 0 {
        return indexes;
    }

    if flip_at_least_one {
        indexes.insert(rng.gen_range(0..length));
    }

    for i in 0..length {
        if rng.gen::<f64>() < mutation_probability {
            indexes.insert(i);
        }
    }

    indexes
}

/// Mutation: copy the base and redraw the selected positions
pub fn mutate<E: Environment + ?Sized>(
    base: &Solution<E::Action>,
    mutation_probability: f64,
    flip_at_least_one: bool,
    environment: &mut E,
    rng: &mut dyn RngCore,
) -> Solution<E::Action> {
    let indexes = mutation_indexes(base.len(), mutation_probability, flip_at_least_one, rng);

    let mut mutated = base.clone();
    for i in indexes {
        mutated[i] = environment.get_random_action(rng);
    }
    mutated
}

/// Build `num_evals` independently mutated copies of one base solution
pub fn mutated_batch<E: Environment + ?Sized>(
    base: &Solution<E::Action>,
    num_evals: usize,
    mutation_probability: f64,
    flip_at_least_one: bool,
    environment: &mut E,
    rng: &mut dyn RngCore,
) -> Vec<Solution<E::Action>> {
    (0..num_evals)
        .map(|_| mutate(base, mutation_probability, flip_at_least_one, environment, rng))
        .collect()
}

/// Stable arg-max over a score batch
///
/// Returns the index and score of the first maximal entry. The batch must hold
/// exactly `expected` scores and none of them may be NaN.
pub fn select_best(scores: &[Score], expected: usize) -> Result<(usize, Score)> {
    if scores.len() != expected {
        return Err(RheaError::ScoreCountMismatch {
            expected,
            actual: scores.len(),
        });
    }

    let mut best: Option<(usize, Score)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            return Err(RheaError::InvalidScore { index, score });
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.ok_or(RheaError::EmptyBatch)
}
