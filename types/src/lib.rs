//! Shared configuration types for tickwork
//!
//! This crate contains serializable configuration types that are shared between
//! the engine library (tickwork-core) and the driver binaries.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Clock Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Default fixed step: one frame at 60 FPS
pub const DEFAULT_FIXED_STEP_SECS: f32 = 1.0 / 60.0;

/// Largest unscaled delta a single frame may report (guards against hitches)
pub const DEFAULT_MAX_DELTA_SECS: f32 = 0.25;

/// How the frame clock produces per-frame deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Multiplier applied to the scaled delta (1.0 = realtime, 0.5 = slow-mo)
    pub time_scale: f32,

    /// Fixed frame length in seconds. `None` measures wall time between frames.
    pub fixed_step_secs: Option<f32>,

    /// Upper bound for the unscaled delta of a single frame
    pub max_delta_secs: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_step_secs: Some(DEFAULT_FIXED_STEP_SECS),
            max_delta_secs: DEFAULT_MAX_DELTA_SECS,
        }
    }
}

impl ClockConfig {
    /// Clock driven by wall time instead of a fixed step
    pub fn realtime() -> Self {
        Self {
            fixed_step_secs: None,
            ..Self::default()
        }
    }

    /// Returns true if frames advance by a fixed step
    pub fn is_fixed_step(&self) -> bool {
        self.fixed_step_secs.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Frame clock settings
    pub clock: ClockConfig,

    /// Directory of timer definition TOML files loaded at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions_dir: Option<String>,
}

impl AppConfig {
    pub fn with_definitions_dir(dir: impl Into<String>) -> Self {
        Self {
            definitions_dir: Some(dir.into()),
            ..Self::default()
        }
    }
}
