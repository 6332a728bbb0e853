//! In-memory scheduler over logical time.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;

use super::{Scheduler, Task, TaskHandle};

#[derive(Clone, Debug)]
struct Entry {
    task: Task,
    key: (Duration, u64),
    interval: Option<Duration>,
}

/// Deterministic scheduler driven entirely by `advance_to`.
///
/// Tasks sit in a `BTreeMap` keyed by `(deadline, sequence)`, so equal
/// deadlines fire in the order they were armed.
#[derive(Clone, Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    queue: BTreeMap<(Duration, u64), TaskHandle>,
    entries: FxHashMap<TaskHandle, Entry>,
    next_seq: u64,
}

impl VirtualScheduler {
    /// Create a scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn arm(&mut self, delay: Duration, task: Task, interval: Option<Duration>) -> TaskHandle {
        let seq = self.bump_seq();
        let handle = TaskHandle(seq);
        let key = (self.now.checked_add(delay).unwrap_or(Duration::MAX), seq);
        self.queue.insert(key, handle);
        self.entries.insert(handle, Entry { task, key, interval });
        handle
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_once(&mut self, delay: Duration, task: Task) -> TaskHandle {
        self.arm(delay, task, None)
    }

    fn schedule_repeating(&mut self, interval: Duration, task: Task) -> TaskHandle {
        assert!(!interval.is_zero(), "Repeating interval must be non-zero");
        self.arm(interval, task, Some(interval))
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.entries.remove(&handle) {
            Some(entry) => {
                self.queue.remove(&entry.key);
                true
            }
            None => false,
        }
    }

    fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    fn pending_count(&self) -> usize {
        self.entries.len()
    }

    fn next_due(&mut self, until: Duration) -> Option<(TaskHandle, Task)> {
        let (&key, &handle) = self.queue.iter().next()?;
        if key.0 > until {
            return None;
        }

        self.queue.remove(&key);
        self.now = self.now.max(key.0);

        let seq = self.bump_seq();
        let entry = self.entries.get_mut(&handle)?;
        let task = entry.task;

        match entry.interval {
            // A repetition past the end of representable time never fires.
            Some(interval) => match key.0.checked_add(interval) {
                Some(deadline) => {
                    entry.key = (deadline, seq);
                    self.queue.insert(entry.key, handle);
                }
                None => {
                    self.entries.remove(&handle);
                }
            },
            None => {
                self.entries.remove(&handle);
            }
        }

        Some((handle, task))
    }

    fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
