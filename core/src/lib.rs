//! Frame-driven timer engine
//!
//! Named countdowns, fire-once timers and edge-triggered chronometers,
//! all advanced by a single per-frame `tick` with host-supplied deltas.

pub mod clock;
pub mod context;
pub mod timers;

// Re-exports for convenience
pub use clock::{FrameClock, FrameDelta};
pub use context::{AppConfig, AppConfigExt, ClockConfig, ConfigError};
pub use timers::{
    EngineHandle, SetStatus, Timer, TimerDefinition, TimerEngine, TimerError,
    load_definitions_from_dir, load_definitions_from_file,
};
