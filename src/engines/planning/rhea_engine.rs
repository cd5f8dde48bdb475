use crate::config::{ConfigSection, RheaConfig};
use crate::engines::planning::{
    operators::{mutated_batch, select_best},
    progress::{ProgressCallback, SilentProgressCallback},
    solution::{random_solution, shift_and_append, Solution},
};
use crate::environment::Environment;
use crate::error::Result;
use crate::types::{RunSummary, TurnReport};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Rolling Horizon Evolutionary Algorithm
///
/// Each turn evolves a batch of mutated rollout plans, scores them through the
/// environment and commits the first action of the best one.
pub struct RollingHorizonEngine<E: Environment> {
    config: RheaConfig,
    environment: E,
    solution: Option<Solution<E::Action>>,
    rng: StdRng,
    progress: Box<dyn ProgressCallback>,
    turn: usize,
    last_turn: Option<TurnReport>,
}

impl<E: Environment> RollingHorizonEngine<E> {
    pub fn new(config: RheaConfig, mut environment: E) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let solution = if config.use_shift_buffer {
            Some(random_solution(
                config.rollout_actions_length,
                &mut environment,
                &mut rng,
            ))
        } else {
            None
        };

        Ok(Self {
            config,
            environment,
            solution,
            rng,
            progress: Box::new(SilentProgressCallback),
            turn: 0,
            last_turn: None,
        })
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressCallback>) -> Self {
        self.progress = progress;
        self
    }

    /// Plan one turn and return the action to commit
    pub fn get_next_action(&mut self) -> Result<E::Action> {
        self.progress.on_turn_start(self.turn);

        let base = self.base_solution();

        let mut candidates = mutated_batch(
            &base,
            self.config.num_evals,
            self.config.mutation_probability,
            self.config.flip_at_least_one,
            &mut self.environment,
            &mut self.rng,
        );

        let scores = self.environment.evaluate_rollout(
            &candidates,
            self.config.discount_factor,
            self.config.ignore_frames,
        )?;
        let (best_index, best_score) = select_best(&scores, candidates.len())?;

        let winner = candidates.swap_remove(best_index);
        // Rollout length >= 1 is enforced by validate()
        let action = winner[0].clone();
        self.solution = Some(winner);

        let report = TurnReport {
            turn: self.turn,
            best_index,
            best_score,
            num_candidates: scores.len(),
        };
        log::debug!(
            "[{}] turn {}: best candidate {}/{} scored {:.4}",
            self.environment.name(),
            report.turn + 1,
            best_index + 1,
            report.num_candidates,
            best_score
        );
        self.progress.on_turn_complete(&report);
        self.last_turn = Some(report);
        self.turn += 1;

        Ok(action)
    }

    /// Run until the environment reports game over (or `max_turns` is hit)
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut turns = 0;
        let mut actions_performed = 0;

        while !self.environment.is_game_over() {
            if self.config.max_turns.is_some_and(|max| turns >= max) {
                log::warn!(
                    "[{}] stopping after {} turns without reaching game over",
                    self.environment.name(),
                    turns
                );
                break;
            }

            let action = self.get_next_action()?;
            for _ in 0..=self.config.ignore_frames {
                self.environment.perform_action(&action)?;
                actions_performed += 1;
            }
            turns += 1;
        }

        let summary = RunSummary {
            environment: self.environment.name().to_string(),
            turns,
            actions_performed,
            final_score: self.environment.get_current_score(),
            game_over: self.environment.is_game_over(),
        };
        log::info!(
            "[{}] final score: {:.2} after {} turns",
            summary.environment,
            summary.final_score,
            summary.turns
        );
        self.progress.on_run_complete(&summary);

        Ok(summary)
    }

    fn base_solution(&mut self) -> Solution<E::Action> {
        match (self.config.use_shift_buffer, self.solution.take()) {
            (true, Some(previous)) => {
                shift_and_append(previous, &mut self.environment, &mut self.rng)
            }
            _ => random_solution(
                self.config.rollout_actions_length,
                &mut self.environment,
                &mut self.rng,
            ),
        }
    }

    /// The retained plan: the last winner, or the initial random plan
    pub fn solution(&self) -> Option<&Solution<E::Action>> {
        self.solution.as_ref()
    }

    pub fn last_turn(&self) -> Option<&TurnReport> {
        self.last_turn.as_ref()
    }

    pub fn config(&self) -> &RheaConfig {
        &self.config
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn into_environment(self) -> E {
        self.environment
    }
}
