//! Error types for configuration operations

use thiserror::Error;

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("time scale must be finite and non-negative, got {value}")]
    InvalidTimeScale { value: f32 },

    #[error("fixed step must be finite and positive, got {value}")]
    InvalidFixedStep { value: f32 },
}
