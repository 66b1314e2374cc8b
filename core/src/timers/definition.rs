//! Timer definition types
//!
//! Definitions are templates loaded from TOML config files that describe
//! named timers to register at startup. Callbacks cannot be expressed in
//! TOML, so definitions build callback-less timers.

use serde::{Deserialize, Serialize};

use super::Timer;

/// Definition of a named timer (loaded from config)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerDefinition {
    /// Unique name the timer is registered under
    pub name: String,

    // ─── Duration ───────────────────────────────────────────────────────────
    /// Timer duration in seconds
    pub duration_secs: f32,

    /// Initial remaining time (defaults to the full duration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_secs: Option<f32>,

    /// Count down on unscaled time
    #[serde(default)]
    pub unscaled: bool,

    // ─── Looping ────────────────────────────────────────────────────────────
    /// Re-arm forever
    #[serde(default)]
    pub loop_infinitely: bool,

    /// Number of times this re-arms after the first expiry (0 = no repeat)
    #[serde(default)]
    pub loops: u32,

    /// Keep the timer idle at zero instead of removing it on expiry
    #[serde(default)]
    pub preserve_after_expiry: bool,
}

impl TimerDefinition {
    pub fn new(name: impl Into<String>, duration_secs: f32) -> Self {
        Self {
            name: name.into(),
            duration_secs,
            start_secs: None,
            unscaled: false,
            loop_infinitely: false,
            loops: 0,
            preserve_after_expiry: false,
        }
    }

    /// Describe why this definition cannot be registered, if it can't
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("timer name must not be empty".to_string());
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(format!(
                "timer '{}' has invalid duration {}",
                self.name, self.duration_secs
            ));
        }
        if let Some(start) = self.start_secs.filter(|s| !s.is_finite() || *s < 0.0) {
            return Err(format!(
                "timer '{}' has invalid start time {}",
                self.name, start
            ));
        }
        Ok(())
    }

    /// Build a timer without callbacks
    pub fn to_timer(&self) -> Timer {
        let mut timer = Timer::new(self.name.clone(), self.duration_secs).loops(self.loops);
        if let Some(start) = self.start_secs {
            timer = timer.starting_at(start);
        }
        if self.unscaled {
            timer = timer.unscaled();
        }
        if self.loop_infinitely {
            timer = timer.looping();
        }
        if self.preserve_after_expiry {
            timer = timer.preserve_after_expiry();
        }
        timer
    }
}

/// Root of a timer definition file: a list of `[[timer]]` tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default, rename = "timer")]
    pub timers: Vec<TimerDefinition>,
}
