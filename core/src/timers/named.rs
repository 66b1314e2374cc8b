//! Registry of named timers
//!
//! Maps a unique name to a `Timer`. Entries are created by upsert, advanced
//! once per tick, and removed either explicitly or when a non-looping,
//! non-preserved timer expires.

use std::collections::HashMap;

use super::{ExpireCallback, Timer, TimerError};

/// Outcome of `set_or_create`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetStatus {
    /// An existing timer had its remaining time overwritten
    Updated,
    /// No timer had that name; a new preserved timer was created
    Created,
}

#[derive(Debug, Default)]
pub struct NamedTimerRegistry {
    timers: HashMap<String, Timer>,
}

impl NamedTimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a timer, replacing any timer with the same name.
    ///
    /// A timer with no time left is armed with its full duration.
    pub fn upsert(&mut self, mut timer: Timer) -> Result<(), TimerError> {
        if timer.name.is_empty() {
            tracing::warn!(
                duration = timer.duration,
                "Rejected timer with empty name; timers must be registered under a non-empty name"
            );
            return Err(TimerError::EmptyName);
        }

        if timer.time_left == 0.0 {
            timer.time_left = timer.duration;
        }

        let name = timer.name.clone();
        if self.timers.insert(name.clone(), timer).is_some() {
            tracing::debug!(timer = %name, "Replaced timer");
        } else {
            tracing::debug!(timer = %name, "Registered timer");
        }
        Ok(())
    }

    /// Remaining seconds, or zero if no timer has that name
    pub fn get_remaining(&self, name: &str) -> f32 {
        self.timers.get(name).map(|t| t.time_left).unwrap_or(0.0)
    }

    /// Overwrite the remaining time of `name`, or create a preserved timer.
    ///
    /// Updating leaves duration, loop settings and callbacks untouched; the
    /// callback is only used when a new timer is created.
    pub fn set_or_create(
        &mut self,
        name: &str,
        seconds: f32,
        on_expire: Option<ExpireCallback>,
    ) -> SetStatus {
        if let Some(timer) = self.timers.get_mut(name) {
            timer.time_left = seconds;
            return SetStatus::Updated;
        }

        let mut timer = Timer::new(name, seconds)
            .starting_at(seconds)
            .preserve_after_expiry();
        timer.on_expire = on_expire;
        self.timers.insert(name.to_string(), timer);
        tracing::debug!(timer = %name, seconds, "Created timer");
        SetStatus::Created
    }

    /// Remove a timer. Returns whether it existed.
    pub fn clear(&mut self, name: &str) -> bool {
        self.timers.remove(name).is_some()
    }

    pub fn clear_all(&mut self) {
        self.timers.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Timer> {
        self.timers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.timers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.timers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Timer> {
        self.timers.values()
    }

    /// Advance every running timer by the delta it runs on.
    ///
    /// A timer set to a negative time expires on the next pass without
    /// counting down. Expired timers that neither loop nor are preserved are
    /// collected during the pass and removed afterwards.
    pub fn advance(&mut self, delta_scaled: f32, delta_unscaled: f32) {
        let mut expired = Vec::new();

        for (name, timer) in self.timers.iter_mut() {
            let was_running = timer.is_running();
            let overdue = timer.time_left < 0.0;
            if !was_running && !overdue {
                // Idle at zero
                continue;
            }

            if was_running {
                let delta = if timer.use_unscaled_time {
                    delta_unscaled
                } else {
                    delta_scaled
                };
                timer.time_left -= delta;
            }

            let reached_zero = timer.time_left <= 0.0;
            if reached_zero {
                timer.time_left = 0.0;
            }

            if was_running {
                timer.fire_update();
            }

            if !reached_zero {
                continue;
            }

            timer.fire_expire();

            if timer.will_repeat() {
                timer.time_left = timer.duration;
                timer.loops_remaining = timer.loops_remaining.saturating_sub(1);
                tracing::debug!(
                    timer = %name,
                    loops_remaining = timer.loops_remaining,
                    "Timer expired and re-armed"
                );
            } else if timer.preserve_after_expiry {
                tracing::debug!(timer = %name, "Timer expired and kept idle");
            } else {
                expired.push(name.clone());
            }
        }

        for name in expired {
            self.timers.remove(&name);
            tracing::debug!(timer = %name, "Timer expired and removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[test]
    fn upsert_arms_unstarted_timer() {
        let mut registry = NamedTimerRegistry::new();
        registry.upsert(Timer::new("foo", 2.0)).unwrap();
        assert_eq!(registry.get_remaining("foo"), 2.0);
    }

    #[test]
    fn upsert_keeps_explicit_start() {
        let mut registry = NamedTimerRegistry::new();
        registry
            .upsert(Timer::new("foo", 10.0).starting_at(3.0))
            .unwrap();
        assert_eq!(registry.get_remaining("foo"), 3.0);
    }

    #[test]
    fn upsert_rejects_empty_name() {
        let mut registry = NamedTimerRegistry::new();
        let result = registry.upsert(Timer::new("", 1.0));
        assert!(matches!(result, Err(TimerError::EmptyName)));
        assert!(registry.is_empty());
    }

    #[test]
    fn upsert_replaces_same_name() {
        let mut registry = NamedTimerRegistry::new();
        registry.upsert(Timer::new("foo", 2.0).looping()).unwrap();
        registry.upsert(Timer::new("foo", 7.0)).unwrap();

        assert_eq!(registry.len(), 1);
        let timer = registry.get("foo").unwrap();
        assert_eq!(timer.duration, 7.0);
        assert!(!timer.loop_infinitely);
    }

    #[test]
    fn set_or_create_reports_status() {
        let mut registry = NamedTimerRegistry::new();
        assert_eq!(registry.set_or_create("x", 5.0, None), SetStatus::Created);
        assert_eq!(registry.set_or_create("x", 1.5, None), SetStatus::Updated);

        let timer = registry.get("x").unwrap();
        assert_eq!(timer.time_left, 1.5);
        assert_eq!(timer.duration, 5.0);
        assert!(timer.preserve_after_expiry);
    }

    #[test]
    fn set_or_create_update_keeps_loop_settings() {
        let mut registry = NamedTimerRegistry::new();
        registry.upsert(Timer::new("x", 4.0).loops(2)).unwrap();
        registry.set_or_create("x", 1.0, None);

        let timer = registry.get("x").unwrap();
        assert_eq!(timer.loops_remaining, 2);
        assert_eq!(timer.duration, 4.0);
    }

    #[test]
    fn clear_reports_existence() {
        let mut registry = NamedTimerRegistry::new();
        registry.set_or_create("x", 1.0, None);
        assert!(registry.clear("x"));
        assert!(!registry.clear("x"));
        assert_eq!(registry.get_remaining("x"), 0.0);
    }

    #[test]
    fn advance_selects_delta_by_time_source() {
        let mut registry = NamedTimerRegistry::new();
        registry.upsert(Timer::new("scaled", 10.0)).unwrap();
        registry.upsert(Timer::new("unscaled", 10.0).unscaled()).unwrap();

        registry.advance(1.0, 3.0);

        assert_eq!(registry.get_remaining("scaled"), 9.0);
        assert_eq!(registry.get_remaining("unscaled"), 7.0);
    }

    #[test]
    fn update_receives_clamped_value_on_crossing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut registry = NamedTimerRegistry::new();
        registry
            .upsert(
                Timer::new("foo", 1.5)
                    .on_update(move |left, duration| sink.borrow_mut().push((left, duration))),
            )
            .unwrap();

        registry.advance(1.0, 1.0);
        registry.advance(1.0, 1.0);

        assert_eq!(*seen.borrow(), vec![(0.5, 1.5), (0.0, 1.5)]);
    }

    #[test]
    fn looping_timer_counts_down_loops() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);

        let mut registry = NamedTimerRegistry::new();
        registry
            .upsert(
                Timer::new("pulse", 1.0)
                    .loops(2)
                    .on_expire(move || counter.set(counter.get() + 1)),
            )
            .unwrap();

        for _ in 0..2 {
            registry.advance(1.0, 1.0);
            assert!(registry.contains("pulse"));
            assert_eq!(registry.get_remaining("pulse"), 1.0);
        }
        assert_eq!(registry.get("pulse").unwrap().loops_remaining, 0);

        registry.advance(1.0, 1.0);
        assert!(!registry.contains("pulse"));
        assert_eq!(fired.get(), 3);
    }

    #[test]
    fn preserved_timer_stays_idle_without_refiring() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);

        let mut registry = NamedTimerRegistry::new();
        registry
            .upsert(
                Timer::new("bar", 1.0)
                    .preserve_after_expiry()
                    .on_expire(move || counter.set(counter.get() + 1)),
            )
            .unwrap();

        for _ in 0..5 {
            registry.advance(1.0, 1.0);
        }

        assert!(registry.contains("bar"));
        assert_eq!(registry.get_remaining("bar"), 0.0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn idle_timer_receives_no_updates() {
        let updates = Rc::new(Cell::new(0));
        let counter = Rc::clone(&updates);

        let mut registry = NamedTimerRegistry::new();
        registry
            .upsert(
                Timer::new("bar", 1.0)
                    .preserve_after_expiry()
                    .on_update(move |_, _| counter.set(counter.get() + 1)),
            )
            .unwrap();

        registry.advance(2.0, 2.0);
        registry.advance(2.0, 2.0);

        assert_eq!(updates.get(), 1);
    }

    #[test]
    fn negative_start_expires_without_update() {
        let fired = Rc::new(Cell::new(0));
        let updates = Rc::new(Cell::new(0));
        let expire_count = Rc::clone(&fired);
        let update_count = Rc::clone(&updates);

        let mut registry = NamedTimerRegistry::new();
        registry
            .upsert(
                Timer::new("neg", 3.0)
                    .starting_at(-1.0)
                    .looping()
                    .on_expire(move || expire_count.set(expire_count.get() + 1))
                    .on_update(move |_, _| update_count.set(update_count.get() + 1)),
            )
            .unwrap();

        registry.advance(0.5, 0.5);

        assert_eq!(fired.get(), 1);
        assert_eq!(updates.get(), 0);
        assert_eq!(registry.get_remaining("neg"), 3.0);
    }

    #[test]
    fn expiries_in_same_pass_are_all_removed() {
        let mut registry = NamedTimerRegistry::new();
        for name in ["a", "b", "c", "d"] {
            registry.upsert(Timer::new(name, 1.0)).unwrap();
        }
        registry.upsert(Timer::new("long", 5.0)).unwrap();

        registry.advance(1.0, 1.0);

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("long"));
    }
}
