use thiserror::Error;

#[derive(Error, Debug)]
pub enum RheaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Score batch mismatch: expected {expected} scores, got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("Invalid score for candidate {index}: {score}")]
    InvalidScore { index: usize, score: f64 },

    #[error("Cannot select from an empty candidate batch")]
    EmptyBatch,

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, RheaError>;
