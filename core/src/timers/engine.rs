//! Per-frame timer engine
//!
//! Owns the named, one-shot and chronometer registries and advances all of
//! them from a single `tick` call. The host supplies a scaled and an unscaled
//! delta once per frame; callbacks run synchronously inside `tick`.

use std::rc::Rc;

use crate::clock::FrameDelta;

use super::handle::{Command, CommandQueue};
use super::{
    ChronometerRegistry, EngineHandle, NamedTimerRegistry, OneShotRegistry, SetStatus, Timer,
    TimerDefinition, TimerError,
};

/// Drives named timers, one-shot timers and chronometers.
///
/// Not thread-safe: all access must happen on the thread driving `tick`.
#[derive(Debug, Default)]
pub struct TimerEngine {
    named: NamedTimerRegistry,
    one_shots: OneShotRegistry,
    chronometers: ChronometerRegistry,

    /// Commands queued through `EngineHandle`s
    pending: CommandQueue,

    /// Number of completed ticks
    ticks: u64,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for queueing mutations from inside callbacks
    pub fn handle(&self) -> EngineHandle {
        EngineHandle::new(Rc::clone(&self.pending))
    }

    // ─── Named timers ───────────────────────────────────────────────────────

    /// Register a timer, replacing any timer with the same name.
    ///
    /// Fails without changing state if the timer has an empty name.
    pub fn upsert(&mut self, timer: Timer) -> Result<(), TimerError> {
        self.named.upsert(timer)
    }

    /// Remaining seconds of `name`, or zero if there is no such timer
    pub fn get_remaining(&self, name: &str) -> f32 {
        self.named.get_remaining(name)
    }

    /// Overwrite the remaining time of `name`, or create a preserved timer
    pub fn set_or_create(&mut self, name: &str, seconds: f32) -> SetStatus {
        self.named.set_or_create(name, seconds, None)
    }

    /// Like `set_or_create`, attaching `on_expire` if the timer is created
    pub fn set_or_create_with(
        &mut self,
        name: &str,
        seconds: f32,
        on_expire: impl FnMut() + 'static,
    ) -> SetStatus {
        self.named.set_or_create(name, seconds, Some(Box::new(on_expire)))
    }

    pub fn clear(&mut self, name: &str) -> bool {
        self.named.clear(name)
    }

    /// Remove every named timer. One-shots and chronometers are untouched.
    pub fn clear_all(&mut self) {
        self.named.clear_all();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named.contains(name)
    }

    pub fn timer(&self, name: &str) -> Option<&Timer> {
        self.named.get(name)
    }

    pub fn timers(&self) -> impl Iterator<Item = &Timer> {
        self.named.iter()
    }

    pub fn timer_names(&self) -> impl Iterator<Item = &str> {
        self.named.names()
    }

    pub fn timer_count(&self) -> usize {
        self.named.len()
    }

    /// Register callback-less timers built from definitions.
    ///
    /// Returns how many were registered.
    pub fn load_definitions(&mut self, definitions: &[TimerDefinition]) -> usize {
        let mut loaded = 0;
        for def in definitions {
            if self.named.upsert(def.to_timer()).is_ok() {
                loaded += 1;
            }
        }
        loaded
    }

    // ─── One-shot timers ────────────────────────────────────────────────────

    pub fn schedule_one_shot(&mut self, seconds: f32, callback: impl FnOnce() + 'static) {
        self.one_shots.schedule(seconds, Box::new(callback));
    }

    pub fn one_shot_count(&self) -> usize {
        self.one_shots.len()
    }

    /// Drop all pending one-shots without firing them
    pub fn clear_one_shots(&mut self) {
        self.one_shots.clear();
    }

    // ─── Chronometers ───────────────────────────────────────────────────────

    /// Arm chronometer `name` for this tick; true once `target` is exceeded
    pub fn trigger_chronometer(&mut self, name: &str, target: f32) -> bool {
        self.chronometers.trigger(name, target)
    }

    pub fn chronometer_elapsed(&self, name: &str) -> f32 {
        self.chronometers.elapsed(name)
    }

    pub fn is_chronometer_finished(&self, name: &str) -> bool {
        self.chronometers.is_finished(name)
    }

    pub fn chronometer_count(&self) -> usize {
        self.chronometers.len()
    }

    pub fn clear_chronometer(&mut self, name: &str) -> bool {
        self.chronometers.clear(name)
    }

    // ─── Ticking ────────────────────────────────────────────────────────────

    /// Advance every registry by one frame.
    ///
    /// Order: named timers, one-shot timers, chronometers. Commands queued
    /// through handles are applied before the first pass and after each pass,
    /// so a callback's one-shot or chronometer trigger reaches the later
    /// passes of the same tick.
    pub fn tick(&mut self, delta_scaled: f32, delta_unscaled: f32) {
        self.apply_pending();

        self.named.advance(delta_scaled, delta_unscaled);
        self.apply_pending();

        self.one_shots.advance(delta_scaled);
        self.apply_pending();

        self.chronometers.advance(delta_scaled);

        self.ticks += 1;
        tracing::trace!(
            tick = self.ticks,
            delta_scaled,
            delta_unscaled,
            timers = self.named.len(),
            one_shots = self.one_shots.len(),
            "Tick complete"
        );

        self.apply_pending();
    }

    pub fn tick_frame(&mut self, delta: FrameDelta) {
        self.tick(delta.scaled, delta.unscaled);
    }

    /// Number of ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply commands queued through handles, in issue order.
    ///
    /// Returns how many were applied.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(command) = next else {
                break;
            };
            self.apply(command);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Upsert(timer) => {
                if let Err(err) = self.named.upsert(timer) {
                    tracing::trace!(error = %err, "Dropped queued upsert");
                }
            }
            Command::SetOrCreate {
                name,
                seconds,
                on_expire,
            } => {
                self.named.set_or_create(&name, seconds, on_expire);
            }
            Command::Clear(name) => {
                self.named.clear(&name);
            }
            Command::ClearAll => self.named.clear_all(),
            Command::ScheduleOneShot { seconds, callback } => {
                self.one_shots.schedule(seconds, callback);
            }
            Command::TriggerChronometer { name, target } => {
                self.chronometers.trigger(&name, target);
            }
        }
    }

    /// Empty all three registries and drop queued commands
    pub fn reset(&mut self) {
        self.named.clear_all();
        self.one_shots.clear();
        self.chronometers.clear_all();
        self.pending.borrow_mut().clear();
    }
}
