//! Timer system
//!
//! This module provides:
//! - **Named timers**: Countdowns keyed by name, with looping and update callbacks
//! - **One-shot timers**: Anonymous countdowns that fire once and are dropped
//! - **Chronometers**: Stopwatches that only run on ticks where they are triggered
//! - **Engine**: Owns all three registries and advances them once per frame
//! - **Definitions**: Timer templates loaded from TOML
//!
//! # Tick Order
//!
//! Each `TimerEngine::tick` advances named timers, then one-shot timers,
//! then chronometers. Callbacks run synchronously during the tick.

mod chronometer;
mod definition;
mod engine;
mod error;
mod handle;
mod loader;
mod named;
mod one_shot;
mod timer;


pub use chronometer::{Chronometer, ChronometerRegistry};
pub use definition::{TimerConfig, TimerDefinition};
pub use engine::TimerEngine;
pub use error::TimerError;
pub use handle::EngineHandle;
pub use loader::{load_definitions_from_dir, load_definitions_from_file};
pub use named::{NamedTimerRegistry, SetStatus};
pub use one_shot::{OneShotCallback, OneShotRegistry};
pub use timer::{ExpireCallback, Timer, UpdateCallback};
