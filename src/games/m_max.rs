use crate::engines::planning::solution::Solution;
use crate::environment::Environment;
use crate::error::{Result, RheaError};
use crate::types::Score;
use rand::{Rng, RngCore};
use rayon::prelude::*;

/// Raise or lower a single entry of the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MMaxAction {
    pub index: usize,
    pub delta: i64,
}

/// Drive every entry of a zeroed array to the value `m`
///
/// Only one entry changes per action. The score is the negative mean absolute
/// distance to `m`. Rollouts are scored on their final state and the batch is
/// evaluated in parallel. The discount factor is ignored.
#[derive(Debug, Clone)]
pub struct MMaxGame {
    state: Vec<i64>,
    m: i64,
}

impl MMaxGame {
    pub fn new(num_dims: usize, m: i64) -> Self {
        Self {
            state: vec![0; num_dims],
            m,
        }
    }

    pub fn state(&self) -> &[i64] {
        &self.state
    }

    fn score_state(&self, state: &[i64]) -> Score {
        if state.is_empty() {
            return 0.0;
        }
        let total: i64 = state.iter().map(|v| (self.m - v).abs()).sum();
        -(total as f64 / state.len() as f64)
    }

    fn apply(state: &mut [i64], action: &MMaxAction) -> Result<()> {
        if !(-1..=1).contains(&action.delta) {
            return Err(RheaError::Environment(format!(
                "Delta must be -1, 0 or 1, got {}",
                action.delta
            )));
        }
        let len = state.len();
        let slot = state.get_mut(action.index).ok_or_else(|| {
            RheaError::Environment(format!(
                "Index {} out of range for {} dimensions",
                action.index, len
            ))
        })?;
        *slot += action.delta;
        Ok(())
    }
}

impl Environment for MMaxGame {
    type Action = MMaxAction;

    fn name(&self) -> &str {
        "M-Max Game"
    }

    fn get_random_action(&mut self, rng: &mut dyn RngCore) -> MMaxAction {
        MMaxAction {
            index: rng.gen_range(0..self.state.len().max(1)),
            delta: rng.gen_range(-1..=1),
        }
    }

    fn perform_action(&mut self, action: &MMaxAction) -> Result<()> {
        Self::apply(&mut self.state, action)
    }

    fn evaluate_rollout(
        &self,
        solutions: &[Solution<MMaxAction>],
        _discount_factor: Option<f64>,
        ignore_frames: usize,
    ) -> Result<Vec<Score>> {
        solutions
            .par_iter()
            .map(|solution| -> Result<Score> {
                let mut state = self.state.clone();
                for action in solution {
                    for _ in 0..=ignore_frames {
                        Self::apply(&mut state, action)?;
                    }
                }
                Ok(self.score_state(&state))
            })
            .collect()
    }

    fn is_game_over(&self) -> bool {
        self.state.iter().all(|&v| v == self.m)
    }

    fn get_current_score(&self) -> Score {
        self.score_state(&self.state)
    }
}
