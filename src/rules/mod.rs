//! Game rules: the state machine and the services it drives.
//!
//! - `MemoryGame`: owns the deck, counters, selection and clock
//! - `Timer`: elapsed seconds, started once per session
//! - `PeekController`: the single open peek window
//! - Snapshots: read-only projections handed to the host
//!
//! Nothing outside this module mutates card state or counters.

pub mod session;
pub mod timer;
pub mod peek;
pub mod snapshot;
pub mod engine;

pub use session::{GamePhase, GameSession, Selection};
pub use timer::Timer;
pub use peek::{peek_penalty, PeekController};
pub use snapshot::{CardFace, CardView, DealtCard, DeckSnapshot, SessionSnapshot};
pub use engine::MemoryGame;
