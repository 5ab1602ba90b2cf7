use super::{run::RunConfig, traits::ConfigSection};
use crate::error::TrackvizError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `TRACKVIZ_RUN__OPERATION=reverse`
/// or `TRACKVIZ_RUN__ARRAY=3,1,2`.
pub const ENV_PREFIX: &str = "TRACKVIZ";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub run: RunConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), TrackvizError> {
        self.run.validate()?;
        Ok(())
    }
}

fn poisoned<T>(_: T) -> TrackvizError {
    TrackvizError::Configuration("Config lock poisoned".to_string())
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

    /// Load a TOML or JSON file (chosen by extension), then apply
    /// `TRACKVIZ_`-prefixed environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TrackvizError> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("run.array")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| TrackvizError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| TrackvizError::Configuration(format!("Failed to parse config: {}", e)))?;

        if let Err(e) = config.validate() {
            log::warn!("rejecting config from {}: {}", path.display(), e);
            return Err(e);
        }

        *self.config.write().map_err(poisoned)? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TrackvizError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| TrackvizError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(err) => err.into_inner().clone(),
        }
    }

    /// Apply `f` to a copy and keep it only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), TrackvizError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.config.write().map_err(poisoned)? = candidate;
        Ok(())
    }
}
