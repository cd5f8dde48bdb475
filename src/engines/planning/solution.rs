//! Rollout plan representation
//!
//! A solution is an ordered sequence of exactly `rollout_actions_length`
//! actions: a candidate plan for the next turns. Only its first action is ever
//! committed to the live environment; the rest is carried forward by the shift
//! buffer.
//!
//! Derivations (shift, mutate) return new values. The base solution of a
//! turn is never edited in place while its candidates are built.
//!
//! # Example
//!
//! ```
//! use rhea::engines::planning::solution::{shift_and_append, Solution};
//! use rhea::games::LineWalk;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut env = LineWalk::new(0, 5);
//! let mut rng = StdRng::seed_from_u64(7);
//! let plan: Solution<i64> = vec![1, 0, -1];
//! let shifted = shift_and_append(plan, &mut env, &mut rng);
//! assert_eq!(&shifted[..2], &[0, -1]);
//! assert_eq!(shifted.len(), 3);
//! ```
use crate::environment::Environment;
use rand::RngCore;

pub type Solution<A> = Vec<A>;

/// Draw `length` independent random actions
pub fn random_solution<E: Environment + ?Sized>(
    length: usize,
    environment: &mut E,
    rng: &mut dyn RngCore,
) -> Solution<E::Action> {
    (0..length)
        .map(|_| environment.get_random_action(rng))
        .collect()
}

/// Drop the first action and append a fresh random one
///
/// An empty solution stays empty.
pub fn shift_and_append<E: Environment + ?Sized>(
    mut solution: Solution<E::Action>,
    environment: &mut E,
    rng: &mut dyn RngCore,
) -> Solution<E::Action> {
    if solution.is_empty() {
        return solution;
    }
    solution.remove(0);
    solution.push(environment.get_random_action(rng));
    solution
}
