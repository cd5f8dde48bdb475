use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::RheaError;
use serde::{Deserialize, Serialize};

/// Engine settings, fixed for the engine's lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RheaConfig {
    pub rollout_actions_length: usize,
    pub mutation_probability: f64,
    pub num_evals: usize,
    pub use_shift_buffer: bool,
    pub flip_at_least_one: bool,
    pub discount_factor: Option<f64>,
    pub ignore_frames: usize,
    pub seed: Option<u64>,
    pub max_turns: Option<usize>,
}

impl Default for RheaConfig {
    fn default() -> Self {
        Self {
            rollout_actions_length: 10,
            mutation_probability: 0.1,
            num_evals: 50,
            use_shift_buffer: true,
            flip_at_least_one: true,
            discount_factor: None,
            ignore_frames: 0,
            seed: None,
            max_turns: None,
        }
    }
}

impl RheaConfig {
    pub fn new(rollout_actions_length: usize, mutation_probability: f64, num_evals: usize) -> Self {
        Self {
            rollout_actions_length,
            mutation_probability,
            num_evals,
            ..Self::default()
        }
    }
}

impl ConfigSection for RheaConfig {
    fn section_name() -> &'static str {
        "rhea"
    }

    fn validate(&self) -> Result<(), RheaError> {
        if self.rollout_actions_length == 0 {
            return Err(RheaError::Configuration(
                "Rollout length must be at least 1".to_string()
            ));
        }
        if self.num_evals == 0 {
            return Err(RheaError::Configuration(
                "Number of evaluations must be at least 1".to_string()
            ));
        }
        // Also rejects NaN
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(RheaError::Configuration(format!(
                "Mutation probability must be between 0 and 1, got {}",
                self.mutation_probability
            )));
        }
        if let Some(discount) = self.discount_factor {
            if !discount.is_finite() {
                return Err(RheaError::Configuration(format!(
                    "Discount factor must be finite, got {}",
                    discount
                )));
            }
        }
        if self.max_turns == Some(0) {
            return Err(RheaError::Configuration(
                "Max turns must be at least 1 when set".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "RHEA".to_string(),
            fields: vec![
                FieldManifest::new(
                    "rollout_actions_length",
                    "integer",
                    serde_json::json!(defaults.rollout_actions_length),
                    "Length of every evolved action sequence",
                )
                .with_range(Some(1.0), None),
                FieldManifest::new(
                    "mutation_probability",
                    "float",
                    serde_json::json!(defaults.mutation_probability),
                    "Independent mutation chance per position",
                )
                .with_range(Some(0.0), Some(1.0)),
                FieldManifest::new(
                    "num_evals",
                    "integer",
                    serde_json::json!(defaults.num_evals),
                    "Candidates evaluated per turn",
                )
                .with_range(Some(1.0), None),
                FieldManifest::new(
                    "use_shift_buffer",
                    "boolean",
                    serde_json::json!(defaults.use_shift_buffer),
                    "Reuse the previous plan shifted by one instead of a fresh random plan",
                ),
                FieldManifest::new(
                    "flip_at_least_one",
                    "boolean",
                    serde_json::json!(defaults.flip_at_least_one),
                    "Force at least one mutated position per candidate",
                ),
                FieldManifest::new(
                    "discount_factor",
                    "float?",
                    serde_json::json!(defaults.discount_factor),
                    "Passed through to rollout scoring",
                ),
                FieldManifest::new(
                    "ignore_frames",
                    "integer",
                    serde_json::json!(defaults.ignore_frames),
                    "Extra repeats of the committed action per turn, also passed to scoring",
                )
                .with_range(Some(0.0), None),
                FieldManifest::new(
                    "seed",
                    "integer?",
                    serde_json::json!(defaults.seed),
                    "Random seed, entropy when absent",
                ),
                FieldManifest::new(
                    "max_turns",
                    "integer?",
                    serde_json::json!(defaults.max_turns),
                    "Stop the run loop after this many turns",
                )
                .with_range(Some(1.0), None),
            ],
        }
    }
}
