use crate::engines::planning::solution::Solution;
use crate::error::Result;
use crate::types::Score;
use rand::RngCore;
use std::fmt::Debug;

/// Contract a turn-based, simulatable domain implements to be planned over.
///
/// The engine treats `Action` as opaque: it only stores actions, clones them
/// into candidate solutions and hands them back to the environment.
///
/// Randomness is threaded in by the caller so runs can be seeded end to end.
pub trait Environment {
    type Action: Clone + Debug + Send + Sync;

    fn name(&self) -> &str;

    /// Draw one legal action. Must not touch live state.
    fn get_random_action(&mut self, rng: &mut dyn RngCore) -> Self::Action;

    /// Apply one action to the live state.
    fn perform_action(&mut self, action: &Self::Action) -> Result<()>;

    /// Score every solution against a private copy of the current state.
    ///
    /// The returned vector is positionally aligned with `solutions`.
    /// `discount_factor` and `ignore_frames` carry environment-defined meaning;
    /// the engine only passes them through.
    fn evaluate_rollout(
        &self,
        solutions: &[Solution<Self::Action>],
        discount_factor: Option<f64>,
        ignore_frames: usize,
    ) -> Result<Vec<Score>>;

    fn is_game_over(&self) -> bool;

    /// Score of the live (non-simulated) state.
    fn get_current_score(&self) -> Score;

    /// Advance one tick without committing a new action.
    fn ignore_frame(&mut self) -> Result<()> {
        Ok(())
    }
}
