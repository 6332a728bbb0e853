//! Delayed-callback scheduling.
//!
//! The engine never blocks. Anything that happens "later" (timer ticks,
//! hiding a mismatched pair, ending a peek, announcing game over) is a
//! `Task` scheduled for a point in logical time. The engine keeps the
//! `TaskHandle` of every outstanding task so it can cancel them.
//!
//! ## Driving time
//!
//! A host advances time explicitly. The engine pulls due tasks from the
//! scheduler with `next_due` until none remain before the target instant,
//! then moves the clock with `advance_to`.
//!
//! ```
//! use std::time::Duration;
//! use rust_memory::scheduler::{Scheduler, Task, VirtualScheduler};
//!
//! let mut scheduler = VirtualScheduler::new();
//! let tick = scheduler.schedule_repeating(Duration::from_secs(1), Task::Tick);
//! let hide = scheduler.schedule_once(Duration::from_millis(500), Task::ResolveMismatch);
//!
//! let target = Duration::from_secs(1);
//! assert_eq!(scheduler.next_due(target), Some((hide, Task::ResolveMismatch)));
//! assert_eq!(scheduler.next_due(target), Some((tick, Task::Tick)));
//! assert_eq!(scheduler.next_due(target), None);
//! scheduler.advance_to(target);
//!
//! // The tick re-armed itself under the same handle.
//! assert!(scheduler.is_pending(tick));
//! assert!(!scheduler.is_pending(hide));
//! ```

mod virtual_clock;

pub use virtual_clock::VirtualScheduler;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Work the engine defers to a later instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    /// Add one second to the session clock.
    Tick,
    /// Hide a mismatched pair and clear the selection.
    ResolveMismatch,
    /// End a peek and restore the board.
    RestorePeek,
    /// Finish the session and emit game over.
    AnnounceGameOver,
}

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Logical-time scheduler.
///
/// Implementations order due tasks by deadline, breaking ties by the
/// order in which they were (re)armed.
pub trait Scheduler {
    /// Current logical time.
    fn now(&self) -> Duration;

    /// Run `task` once, `delay` from now.
    fn schedule_once(&mut self, delay: Duration, task: Task) -> TaskHandle;

    /// Run `task` every `interval`, first at `now + interval`.
    ///
    /// The handle stays valid across repetitions until cancelled.
    fn schedule_repeating(&mut self, interval: Duration, task: Task) -> TaskHandle;

    /// Cancel a task. Returns `false` if it was not pending.
    fn cancel(&mut self, handle: TaskHandle) -> bool;

    /// Check if a task is still scheduled.
    fn is_pending(&self, handle: TaskHandle) -> bool;

    /// Number of scheduled tasks.
    fn pending_count(&self) -> usize;

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its deadline. Repeating tasks are re-armed before being returned.
    fn next_due(&mut self, until: Duration) -> Option<(TaskHandle, Task)>;

    /// Move the clock forward to `until`.
    ///
    /// Callers drain `next_due(until)` first; tasks left behind would fire late.
    fn advance_to(&mut self, until: Duration);
}
