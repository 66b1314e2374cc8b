use std::cell::RefCell;
use std::rc::Rc;

use tickwork_core::{AppConfig, AppConfigExt, FrameClock, TimerEngine};

/// Lines produced by timer callbacks, drained after each command.
pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Holds all state for the CLI session.
/// This is a lightweight container - logic lives in the engine and clock.
pub struct CliContext {
    pub config: AppConfig,
    pub engine: TimerEngine,
    pub clock: FrameClock,
    /// Filled by callbacks while the engine ticks
    pub events: EventLog,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load_or_default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let clock = FrameClock::new(&config.clock);
        Self {
            config,
            engine: TimerEngine::new(),
            clock,
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Take every callback line recorded since the last drain
    pub fn drain_events(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
