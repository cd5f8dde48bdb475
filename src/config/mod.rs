pub mod traits;
pub mod rhea;
pub mod game;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use rhea::RheaConfig;
pub use game::{GameConfig, GameKind, LineWalkConfig, MMaxConfig};
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
