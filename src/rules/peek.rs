//! Peek window tracking.
//!
//! A peek shows every unmatched card for a fixed window. Re-triggering
//! while a window is open cancels the pending restore and schedules a new
//! one, so at most one restore is ever pending and the window is extended.

use std::time::Duration;

use crate::scheduler::{Scheduler, Task, TaskHandle};

/// Seconds charged for the `peek_count`-th peek of a session (1-based).
#[must_use]
pub fn peek_penalty(peek_count: u32, free_peeks: u32, penalty_seconds: u64) -> u64 {
    if peek_count > free_peeks {
        penalty_seconds
    } else {
        0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeekController {
    restore: Option<TaskHandle>,
}

impl PeekController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a peek window is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.restore.is_some()
    }

    /// Open (or extend) the peek window. Returns `true` if an open window
    /// was extended.
    pub fn begin<S: Scheduler>(&mut self, scheduler: &mut S, duration: Duration) -> bool {
        let extended = self.cancel(scheduler);
        self.restore = Some(scheduler.schedule_once(duration, Task::RestorePeek));
        extended
    }

    /// Handle a fired restore. Returns `true` if it closed the live window.
    pub fn on_restore(&mut self, handle: TaskHandle) -> bool {
        if self.restore == Some(handle) {
            self.restore = None;
            true
        } else {
            false
        }
    }

    /// Close the window without restoring. Returns `true` if one was open.
    pub fn cancel<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        match self.restore.take() {
            Some(handle) => {
                scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::VirtualScheduler;

    const WINDOW: Duration = Duration::from_secs(3);

    #[test]
    fn test_penalty_rule() {
        assert_eq!(peek_penalty(1, 1, 5), 0);
        assert_eq!(peek_penalty(2, 1, 5), 5);
        assert_eq!(peek_penalty(10, 1, 5), 5);
        assert_eq!(peek_penalty(2, 2, 5), 0);
        assert_eq!(peek_penalty(1, 0, 5), 5);
    }

    #[test]
    fn test_window_closes_on_restore() {
        let mut scheduler = VirtualScheduler::new();
        let mut peek = PeekController::new();

        assert!(!peek.begin(&mut scheduler, WINDOW));
        assert!(peek.is_active());

        let (handle, task) = scheduler.next_due(WINDOW).unwrap();
        assert_eq!(task, Task::RestorePeek);
        assert!(peek.on_restore(handle));
        assert!(!peek.is_active());
    }

    #[test]
    fn test_retrigger_extends_window() {
        let mut scheduler = VirtualScheduler::new();
        let mut peek = PeekController::new();

        peek.begin(&mut scheduler, WINDOW);
        scheduler.advance_to(Duration::from_secs(2));
        assert!(peek.begin(&mut scheduler, WINDOW));
        assert_eq!(scheduler.pending_count(), 1);

        // First deadline (3s) passes without a restore.
        assert!(scheduler.next_due(Duration::from_secs(4)).is_none());
        let (handle, _) = scheduler.next_due(Duration::from_secs(5)).unwrap();
        assert!(peek.on_restore(handle));
    }

    #[test]
    fn test_stale_restore_is_ignored() {
        let mut scheduler = VirtualScheduler::new();
        let mut peek = PeekController::new();
        peek.begin(&mut scheduler, WINDOW);

        assert!(!peek.on_restore(TaskHandle(12345)));
        assert!(peek.is_active());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = VirtualScheduler::new();
        let mut peek = PeekController::new();

        assert!(!peek.cancel(&mut scheduler));
        peek.begin(&mut scheduler, WINDOW);
        assert!(peek.cancel(&mut scheduler));
        assert_eq!(scheduler.pending_count(), 0);
        assert!(!peek.is_active());
    }
}
