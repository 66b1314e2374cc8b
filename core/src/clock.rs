//! Frame clock for driving the timer engine
//!
//! Produces the pair of deltas `TimerEngine::tick` expects:
//! - **Unscaled**: real frame time (wall clock or a fixed step), clamped to
//!   a maximum so a stalled frame cannot fast-forward every timer
//! - **Scaled**: unscaled time multiplied by the time scale, or zero while paused

use std::time::Instant;

use tickwork_types::ClockConfig;

/// Deltas for a single frame, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameDelta {
    pub scaled: f32,
    pub unscaled: f32,
}

impl FrameDelta {
    /// Same delta for both time sources
    pub fn uniform(secs: f32) -> Self {
        Self {
            scaled: secs,
            unscaled: secs,
        }
    }
}

/// Clock that measures or simulates frame time
#[derive(Debug)]
pub struct FrameClock {
    /// Multiplier for scaled time (1.0 = realtime, 0.5 = slow-mo)
    time_scale: f32,

    /// Fixed frame length; `None` measures wall time
    fixed_step: Option<f32>,

    /// Upper bound for a single unscaled delta
    max_delta: f32,

    /// While paused, scaled time stops but unscaled time keeps running
    paused: bool,

    /// When the previous frame was sampled (wall-time mode)
    last_frame: Option<Instant>,

    /// Total unscaled seconds produced so far
    unscaled_elapsed: f64,

    /// Total scaled seconds produced so far
    scaled_elapsed: f64,

    frames: u64,
}

impl FrameClock {
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            time_scale: config.time_scale.max(0.0),
            fixed_step: config.fixed_step_secs,
            max_delta: config.max_delta_secs,
            paused: false,
            last_frame: None,
            unscaled_elapsed: 0.0,
            scaled_elapsed: 0.0,
            frames: 0,
        }
    }

    /// Clock that advances exactly `step` seconds per frame
    pub fn fixed(step: f32) -> Self {
        Self::new(&ClockConfig {
            fixed_step_secs: Some(step),
            max_delta_secs: step.max(tickwork_types::DEFAULT_MAX_DELTA_SECS),
            ..ClockConfig::default()
        })
    }

    /// Sample the next frame's deltas
    pub fn next_frame(&mut self) -> FrameDelta {
        let raw = match self.fixed_step {
            Some(step) => step,
            None => {
                let now = Instant::now();
                let raw = self
                    .last_frame
                    .map(|last| now.duration_since(last).as_secs_f32())
                    .unwrap_or(0.0);
                self.last_frame = Some(now);
                raw
            }
        };

        let unscaled = raw.clamp(0.0, self.max_delta);
        let scaled = if self.paused {
            0.0
        } else {
            unscaled * self.time_scale
        };

        self.frames += 1;
        self.unscaled_elapsed += f64::from(unscaled);
        self.scaled_elapsed += f64::from(scaled);

        FrameDelta { scaled, unscaled }
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total scaled seconds produced
    pub fn scaled_elapsed(&self) -> f64 {
        self.scaled_elapsed
    }

    /// Total unscaled seconds produced
    pub fn unscaled_elapsed(&self) -> f64 {
        self.unscaled_elapsed
    }

    /// Format scaled elapsed time as MM:SS.ms
    pub fn format_elapsed(&self) -> String {
        let secs = self.scaled_elapsed;
        let mins = (secs / 60.0).floor() as u32;
        let secs_remainder = secs % 60.0;
        format!("{:02}:{:05.2}", mins, secs_remainder)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(&ClockConfig::default())
    }
}
