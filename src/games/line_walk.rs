use crate::engines::planning::solution::Solution;
use crate::environment::Environment;
use crate::error::{Result, RheaError};
use crate::types::Score;
use rand::{Rng, RngCore};

/// One-dimensional walk towards a goal position
///
/// Each action is a step of -1, 0 or +1. The score is the negative distance to
/// the goal, so 0 means the goal is reached and the game is over.
#[derive(Debug, Clone)]
pub struct LineWalk {
    position: i64,
    goal: i64,
}

impl LineWalk {
    pub fn new(start: i64, goal: i64) -> Self {
        Self { position: start, goal }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    fn score_position(&self, position: i64) -> Score {
        -((self.goal - position).abs() as f64)
    }

    fn check_step(step: i64) -> Result<()> {
        if !(-1..=1).contains(&step) {
            return Err(RheaError::Environment(format!(
                "Step must be -1, 0 or 1, got {}",
                step
            )));
        }
        Ok(())
    }

    /// Simulate one plan; every step is applied `1 + ignore_frames` times
    fn simulate(
        &self,
        solution: &[i64],
        discount_factor: Option<f64>,
        ignore_frames: usize,
    ) -> Result<Score> {
        let mut position = self.position;
        let mut discounted = 0.0;
        let mut weight = 1.0;

        for &step in solution {
            Self::check_step(step)?;
            position += step * (1 + ignore_frames as i64);

            if let Some(gamma) = discount_factor {
                discounted += weight * self.score_position(position);
                weight *= gamma;
            }
        }

        Ok(match discount_factor {
            Some(_) => discounted,
            None => self.score_position(position),
        })
    }
}

impl Environment for LineWalk {
    type Action = i64;

    fn name(&self) -> &str {
        "Line Walk"
    }

    fn get_random_action(&mut self, rng: &mut dyn RngCore) -> i64 {
        rng.gen_range(-1..=1)
    }

    fn perform_action(&mut self, action: &i64) -> Result<()> {
        Self::check_step(*action)?;
        self.position += action;
        Ok(())
    }

    fn evaluate_rollout(
        &self,
        solutions: &[Solution<i64>],
        discount_factor: Option<f64>,
        ignore_frames: usize,
    ) -> Result<Vec<Score>> {
        solutions
            .iter()
            .map(|solution| self.simulate(solution, discount_factor, ignore_frames))
            .collect()
    }

    fn is_game_over(&self) -> bool {
        self.position == self.goal
    }

    fn get_current_score(&self) -> Score {
        self.score_position(self.position)
    }
}
