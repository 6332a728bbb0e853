//! Engine-to-host event emission.
//!
//! Hosts subscribe a `GameObserver` (any `FnMut(&GameEvent)` works) and
//! are called back synchronously whenever the engine changes observable
//! state outside of a direct snapshot return: timer ticks, settled
//! comparisons, peek start/end, game over.

pub mod event;
pub mod observer;

pub use event::{format_clock, GameEvent, GameOverSummary};
pub use observer::{EventLog, GameObserver};
