//! Session clock.
//!
//! Counts elapsed seconds with a repeating `Task::Tick`. The clock starts
//! at most once per session and stops on completion or reset. Penalties
//! add seconds directly without touching the running state.

use std::time::Duration;

use crate::scheduler::{Scheduler, Task, TaskHandle};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    elapsed_seconds: u64,
    tick: Option<TaskHandle>,
    started: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tick.is_some()
    }

    /// Start ticking every `interval`.
    ///
    /// Returns `false` without scheduling anything if the timer has already
    /// been started this session, even if it has since stopped.
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S, interval: Duration) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.tick = Some(scheduler.schedule_repeating(interval, Task::Tick));
        true
    }

    /// Stop ticking. Idempotent; returns `false` if already stopped.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        match self.tick.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Handle a fired tick. Returns the new elapsed time, or `None` if the
    /// handle is not this timer's live tick.
    pub fn on_tick(&mut self, handle: TaskHandle) -> Option<u64> {
        if self.tick != Some(handle) {
            return None;
        }
        self.elapsed_seconds += 1;
        Some(self.elapsed_seconds)
    }

    pub fn add_penalty(&mut self, seconds: u64) {
        self.elapsed_seconds += seconds;
    }

    /// Stop and return to zero, ready to start again.
    pub fn reset<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.stop(scheduler);
        *self = Self::default();
    }
}
