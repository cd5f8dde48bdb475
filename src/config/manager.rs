use super::{
    game::GameConfig,
    rhea::RheaConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::RheaError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `RHEA__RHEA__NUM_EVALS=20`
pub const ENV_PREFIX: &str = "RHEA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rhea: RheaConfig,
    pub game: GameConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RheaError> {
        self.rhea.validate()?;
        self.game.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![self.rhea.to_manifest(), self.game.to_manifest()]
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RheaError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RheaError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        self.replace(config)
    }

    /// Merge defaults, an optional file and `RHEA__*` environment variables
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), RheaError> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_ref()));
        }

        let config: AppConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;

        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), RheaError> {
        let toml_str = toml::to_string_pretty(&self.get())
            .map_err(|e| RheaError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| RheaError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply `f` to a copy and keep it only if it still validates
    pub fn update<F>(&self, f: F) -> Result<(), RheaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.get();
        f(&mut config);
        config.validate()?;
        self.replace(config)
    }

    fn replace(&self, config: AppConfig) -> Result<(), RheaError> {
        let mut guard = self
            .config
            .write()
            .map_err(|_| RheaError::Configuration("Config lock poisoned".to_string()))?;
        *guard = config;
        Ok(())
    }
}
