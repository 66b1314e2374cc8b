//! Anonymous fire-once countdowns

use std::fmt;

/// Callback fired when a one-shot timer runs out
pub type OneShotCallback = Box<dyn FnOnce()>;

struct OneShotTimer {
    time_left: f32,
    callback: OneShotCallback,
}

/// Ordered collection of one-shot timers.
///
/// Entries cannot be looked up or cancelled individually; each fires exactly
/// once and is then dropped.
#[derive(Default)]
pub struct OneShotRegistry {
    entries: Vec<OneShotTimer>,
}

impl OneShotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, seconds: f32, callback: OneShotCallback) {
        self.entries.push(OneShotTimer {
            time_left: seconds,
            callback,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending entry without firing it
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Count every entry down by `delta_scaled`, firing those that run out.
    ///
    /// Works on a snapshot of the current entries and rebuilds the live list
    /// from the survivors, so removal never skips a neighbour.
    pub fn advance(&mut self, delta_scaled: f32) {
        let pending = std::mem::take(&mut self.entries);
        let mut survivors = Vec::with_capacity(pending.len());
        let mut fired = 0usize;

        for mut entry in pending {
            entry.time_left -= delta_scaled;
            if entry.time_left <= 0.0 {
                (entry.callback)();
                fired += 1;
            } else {
                survivors.push(entry);
            }
        }

        self.entries = survivors;

        if fired > 0 {
            tracing::debug!(fired, remaining = self.entries.len(), "One-shot timers fired");
        }
    }
}

impl fmt::Debug for OneShotRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneShotRegistry")
            .field("pending", &self.entries.len())
            .finish()
    }
}
