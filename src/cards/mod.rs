//! Cards and the deck generator.
//!
//! ## Key Types
//!
//! - `Symbol`: One of the 15 palette glyphs
//! - `Card` / `CardState`: A dealt card and where it is in the flip cycle
//! - `Deck`: The 30 shuffled cards of one session
//! - `fisher_yates`: The unbiased in-place shuffle the deck is dealt with

pub mod symbol;
pub mod card;
pub mod deck;

pub use symbol::{Symbol, PALETTE, PAIR_COUNT};
pub use card::{Card, CardState};
pub use deck::{fisher_yates, Deck, DECK_SIZE};
