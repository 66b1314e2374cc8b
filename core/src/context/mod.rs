mod config;
mod error;

pub use config::{AppConfig, AppConfigExt, ClockConfig, CONFIG_APP_NAME, CONFIG_NAME};
pub use error::ConfigError;
