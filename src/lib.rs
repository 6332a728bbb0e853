//! # rust-memory
//!
//! Rule engine for a timed card-matching ("memory") game.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The engine owns every card state and counter.
//!    Hosts send intents (`flip`, `peek`, `reset`) and render snapshots.
//!
//! 2. **Permissive Intents**: An intent that is not allowed right now is a
//!    silent no-op, never an error.
//!
//! 3. **Logical Time**: Delays are scheduled tasks, not sleeps. Hosts drive
//!    time with `MemoryGame::advance`, which makes every timing rule
//!    deterministic and testable.
//!
//! ## Modules
//!
//! - `core`: Card IDs, RNG, configuration
//! - `cards`: Symbols, cards, the deck generator
//! - `scheduler`: Delayed and repeating tasks with cancellable handles
//! - `events`: Outcome events and observers
//! - `rules`: The game state machine, timer and peek controller

pub mod core;
pub mod cards;
pub mod scheduler;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{CardId, ConfigError, EngineConfig, GameRng};

pub use crate::cards::{Card, CardState, Deck, Symbol, DECK_SIZE, PAIR_COUNT};

pub use crate::scheduler::{Scheduler, Task, TaskHandle, VirtualScheduler};

pub use crate::events::{format_clock, EventLog, GameEvent, GameObserver, GameOverSummary};

pub use crate::rules::{
    CardFace, CardView, DeckSnapshot, GamePhase, GameSession, MemoryGame, SessionSnapshot,
};
