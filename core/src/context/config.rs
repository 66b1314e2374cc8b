//! Application configuration
//!
//! This module re-exports shared types from tickwork-types and provides
//! validation and persistence for AppConfig.

use std::path::PathBuf;

pub use tickwork_types::{AppConfig, ClockConfig};

use super::ConfigError;

/// Application name used for the confy config directory
pub const CONFIG_APP_NAME: &str = "tickwork";

/// Config file stem inside the app directory
pub const CONFIG_NAME: &str = "config";

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Result<Self, ConfigError>;
    fn load_or_default() -> Self;
    fn save(&self) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
    fn validate(&self) -> Result<(), ConfigError>;
    fn definitions_path(&self) -> Option<PathBuf>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Result<Self, ConfigError> {
        let config: AppConfig = confy::load(CONFIG_APP_NAME, CONFIG_NAME)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the stored config, falling back to defaults if it is missing or invalid
    fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(CONFIG_APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(
            CONFIG_APP_NAME,
            CONFIG_NAME,
        )?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.clock.time_scale;
        if !scale.is_finite() || scale < 0.0 {
            return Err(ConfigError::InvalidTimeScale { value: scale });
        }

        if let Some(step) = self.clock.fixed_step_secs {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidFixedStep { value: step });
            }
        }

        Ok(())
    }

    fn definitions_path(&self) -> Option<PathBuf> {
        self.definitions_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }
}
