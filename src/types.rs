use serde::{Deserialize, Serialize};

/// Environment-defined score. Higher is strictly better, no bounds assumed.
pub type Score = f64;

/// Outcome of one planning step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: usize,
    pub best_index: usize,
    pub best_score: Score,
    pub num_candidates: usize,
}

/// Complete run result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub environment: String,
    pub turns: usize,
    pub actions_performed: usize,
    pub final_score: Score,
    pub game_over: bool, // false when stopped by max_turns
}
