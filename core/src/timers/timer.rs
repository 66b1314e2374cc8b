//! Named timer entity
//!
//! A `Timer` is a countdown keyed by a unique name. It is owned by the
//! engine once registered; callers refer to it only by name afterwards.
//!
//! # Lifecycle
//!
//! 1. Built with `Timer::new` and registered via `upsert`
//! 2. Counts down each tick by the scaled or unscaled delta
//! 3. Expires → `on_expire` fires → re-armed (looping), kept idle
//!    (preserved) or removed

use std::fmt;

/// Callback fired once per expiry event
pub type ExpireCallback = Box<dyn FnMut()>;

/// Callback fired every tick a timer is running, with `(time_left, duration)`
pub type UpdateCallback = Box<dyn FnMut(f32, f32)>;

/// A named countdown timer
pub struct Timer {
    /// Unique key in the registry
    pub name: String,

    // ─── Timing ─────────────────────────────────────────────────────────────
    /// Remaining seconds (never negative once observed)
    pub time_left: f32,

    /// Value `time_left` resets to on loop or re-arm
    pub duration: f32,

    /// Count down on unscaled time instead of scaled time
    pub use_unscaled_time: bool,

    // ─── Looping ────────────────────────────────────────────────────────────
    /// Re-arm forever; never auto-removed
    pub loop_infinitely: bool,

    /// Additional automatic re-arms after the first expiry
    pub loops_remaining: u32,

    /// Keep the entry idle at zero instead of removing it on expiry
    pub preserve_after_expiry: bool,

    // ─── Callbacks ──────────────────────────────────────────────────────────
    pub on_expire: Option<ExpireCallback>,
    pub on_update: Option<UpdateCallback>,
}

impl Timer {
    /// Create a timer that counts `duration` seconds on scaled time.
    ///
    /// `time_left` starts at zero, so registering the timer arms it with the
    /// full duration.
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            time_left: 0.0,
            duration,
            use_unscaled_time: false,
            loop_infinitely: false,
            loops_remaining: 0,
            preserve_after_expiry: false,
            on_expire: None,
            on_update: None,
        }
    }

    /// Start at `secs` instead of the full duration
    pub fn starting_at(mut self, secs: f32) -> Self {
        self.time_left = secs;
        self
    }

    /// Re-arm forever
    pub fn looping(mut self) -> Self {
        self.loop_infinitely = true;
        self
    }

    /// Re-arm `count` more times after the first expiry
    pub fn loops(mut self, count: u32) -> Self {
        self.loops_remaining = count;
        self
    }

    pub fn unscaled(mut self) -> Self {
        self.use_unscaled_time = true;
        self
    }

    pub fn preserve_after_expiry(mut self) -> Self {
        self.preserve_after_expiry = true;
        self
    }

    pub fn on_expire(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_expire = Some(Box::new(callback));
        self
    }

    pub fn on_update(mut self, callback: impl FnMut(f32, f32) + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Returns true while the timer is counting down
    pub fn is_running(&self) -> bool {
        self.time_left > 0.0
    }

    /// Returns true if the timer will re-arm on its next expiry
    pub fn will_repeat(&self) -> bool {
        self.loop_infinitely || self.loops_remaining > 0
    }

    /// Get fill percentage for countdown display (1.0 = full, 0.0 = expired)
    pub fn fill_percent(&self) -> f32 {
        if self.duration > 0.0 {
            (self.time_left / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub(crate) fn fire_update(&mut self) {
        if let Some(on_update) = self.on_update.as_mut() {
            on_update(self.time_left, self.duration);
        }
    }

    pub(crate) fn fire_expire(&mut self) {
        if let Some(on_expire) = self.on_expire.as_mut() {
            on_expire();
        }
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("name", &self.name)
            .field("time_left", &self.time_left)
            .field("duration", &self.duration)
            .field("use_unscaled_time", &self.use_unscaled_time)
            .field("loop_infinitely", &self.loop_infinitely)
            .field("loops_remaining", &self.loops_remaining)
            .field("preserve_after_expiry", &self.preserve_after_expiry)
            .field("on_expire", &self.on_expire.is_some())
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}
