use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::RheaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub kind: GameKind,
    pub m_max: MMaxConfig,
    pub line_walk: LineWalkConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    MMax,
    LineWalk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MMaxConfig {
    pub num_dims: usize,
    pub m: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineWalkConfig {
    pub start: i64,
    pub goal: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            kind: GameKind::MMax,
            m_max: MMaxConfig::default(),
            line_walk: LineWalkConfig::default(),
        }
    }
}

impl Default for MMaxConfig {
    fn default() -> Self {
        Self { num_dims: 600, m: 50 }
    }
}

impl Default for LineWalkConfig {
    fn default() -> Self {
        Self { start: 0, goal: 5 }
    }
}

impl ConfigSection for GameConfig {
    fn section_name() -> &'static str {
        "game"
    }

    fn validate(&self) -> Result<(), RheaError> {
        if self.kind == GameKind::MMax && self.m_max.num_dims == 0 {
            return Err(RheaError::Configuration(
                "M-Max game needs at least one dimension".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Game".to_string(),
            fields: vec![
                FieldManifest::new(
                    "kind",
                    "enum(m_max, line_walk)",
                    serde_json::json!(defaults.kind),
                    "Which demo environment to run",
                ),
                FieldManifest::new(
                    "m_max.num_dims",
                    "integer",
                    serde_json::json!(defaults.m_max.num_dims),
                    "Length of the M-Max state array",
                )
                .with_range(Some(1.0), None),
                FieldManifest::new(
                    "m_max.m",
                    "integer",
                    serde_json::json!(defaults.m_max.m),
                    "Target value for every M-Max entry",
                ),
                FieldManifest::new(
                    "line_walk.start",
                    "integer",
                    serde_json::json!(defaults.line_walk.start),
                    "Starting position on the line",
                ),
                FieldManifest::new(
                    "line_walk.goal",
                    "integer",
                    serde_json::json!(defaults.line_walk.goal),
                    "Target position on the line",
                ),
            ],
        }
    }
}
