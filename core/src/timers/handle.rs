//! Deferred command handle
//!
//! Callbacks run while the engine is mutably borrowed by `tick`, so they
//! cannot call into it directly. They capture an `EngineHandle` instead and
//! queue commands, which the engine applies between the passes of the running
//! tick: after named timers, after one-shots, and once the tick completes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use super::{ExpireCallback, OneShotCallback, Timer};

pub(crate) enum Command {
    Upsert(Timer),
    SetOrCreate {
        name: String,
        seconds: f32,
        on_expire: Option<ExpireCallback>,
    },
    Clear(String),
    ClearAll,
    ScheduleOneShot {
        seconds: f32,
        callback: OneShotCallback,
    },
    TriggerChronometer {
        name: String,
        target: f32,
    },
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upsert(timer) => f.debug_tuple("Upsert").field(&timer.name).finish(),
            Self::SetOrCreate { name, seconds, .. } => f
                .debug_struct("SetOrCreate")
                .field("name", name)
                .field("seconds", seconds)
                .finish(),
            Self::Clear(name) => f.debug_tuple("Clear").field(name).finish(),
            Self::ClearAll => f.write_str("ClearAll"),
            Self::ScheduleOneShot { seconds, .. } => f
                .debug_struct("ScheduleOneShot")
                .field("seconds", seconds)
                .finish(),
            Self::TriggerChronometer { name, target } => f
                .debug_struct("TriggerChronometer")
                .field("name", name)
                .field("target", target)
                .finish(),
        }
    }
}

pub(crate) type CommandQueue = Rc<RefCell<VecDeque<Command>>>;

/// Cloneable handle that queues engine mutations.
///
/// Commands are applied in the order they were issued.
#[derive(Clone)]
pub struct EngineHandle {
    queue: CommandQueue,
}

impl EngineHandle {
    pub(crate) fn new(queue: CommandQueue) -> Self {
        Self { queue }
    }

    fn push(&self, command: Command) {
        self.queue.borrow_mut().push_back(command);
    }

    pub fn upsert(&self, timer: Timer) {
        self.push(Command::Upsert(timer));
    }

    pub fn set_or_create(&self, name: impl Into<String>, seconds: f32) {
        self.push(Command::SetOrCreate {
            name: name.into(),
            seconds,
            on_expire: None,
        });
    }

    pub fn set_or_create_with(
        &self,
        name: impl Into<String>,
        seconds: f32,
        on_expire: impl FnMut() + 'static,
    ) {
        self.push(Command::SetOrCreate {
            name: name.into(),
            seconds,
            on_expire: Some(Box::new(on_expire)),
        });
    }

    pub fn clear(&self, name: impl Into<String>) {
        self.push(Command::Clear(name.into()));
    }

    pub fn clear_all(&self) {
        self.push(Command::ClearAll);
    }

    pub fn schedule_one_shot(&self, seconds: f32, callback: impl FnOnce() + 'static) {
        self.push(Command::ScheduleOneShot {
            seconds,
            callback: Box::new(callback),
        });
    }

    /// Queue a chronometer trigger. The result is discarded; use the engine
    /// directly when the latch outcome matters.
    pub fn trigger_chronometer(&self, name: impl Into<String>, target: f32) {
        self.push(Command::TriggerChronometer {
            name: name.into(),
            target,
        });
    }

    /// Number of commands waiting to be applied
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle")
            .field("pending", &self.pending())
            .finish()
    }
}
