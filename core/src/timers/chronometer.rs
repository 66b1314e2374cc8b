//! Edge-triggered chronometers
//!
//! A chronometer only accumulates time on ticks where the caller triggers it.
//! Triggering reports `true` exactly once, on the first trigger after the
//! accumulated time exceeds the target. A tick without a trigger resets both
//! the accumulated time and the latch.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chronometer {
    /// Elapsed seconds since the last reset
    pub accumulated: f32,

    /// Set by `trigger`, consumed by the next `advance`
    pub triggered_this_tick: bool,

    /// Latched once the target was exceeded; cleared on an idle tick
    pub finished: bool,
}

#[derive(Debug, Default)]
pub struct ChronometerRegistry {
    chronometers: HashMap<String, Chronometer>,
}

impl ChronometerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `name` for the current tick and check it against `target`.
    ///
    /// Returns true only on the call where the target is first exceeded.
    /// Calling this several times in one tick arms it once.
    pub fn trigger(&mut self, name: &str, target: f32) -> bool {
        let chrono = self.chronometers.entry(name.to_string()).or_default();
        chrono.triggered_this_tick = true;

        if chrono.finished {
            return false;
        }

        if chrono.accumulated > target {
            chrono.accumulated = 0.0;
            chrono.finished = true;
            tracing::debug!(chronometer = %name, target, "Chronometer reached target");
            return true;
        }

        false
    }

    /// Accumulate time for triggered chronometers and reset idle ones.
    pub fn advance(&mut self, delta_scaled: f32) {
        for chrono in self.chronometers.values_mut() {
            if chrono.triggered_this_tick {
                chrono.accumulated += delta_scaled;
                chrono.triggered_this_tick = false;
            } else {
                // Idle tick also releases the latch
                chrono.accumulated = 0.0;
                chrono.finished = false;
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Chronometer> {
        self.chronometers.get(name)
    }

    /// Accumulated seconds, or zero if absent
    pub fn elapsed(&self, name: &str) -> f32 {
        self.chronometers
            .get(name)
            .map(|c| c.accumulated)
            .unwrap_or(0.0)
    }

    pub fn is_finished(&self, name: &str) -> bool {
        self.chronometers.get(name).is_some_and(|c| c.finished)
    }

    pub fn clear(&mut self, name: &str) -> bool {
        self.chronometers.remove(name).is_some()
    }

    pub fn clear_all(&mut self) {
        self.chronometers.clear();
    }

    pub fn len(&self) -> usize {
        self.chronometers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chronometers.is_empty()
    }
}
