//! Card identification.
//!
//! Every card dealt into a session has a unique `CardId`.
//!
//! ## ID Layout
//!
//! IDs are the card's position in the freshly dealt deck: `0..deck_len`.
//! A new deck is dealt on every session, so an ID is only meaningful
//! within the session that produced it.
//!
//! ```
//! use rust_memory::core::CardId;
//!
//! let first = CardId::new(0);
//! assert_eq!(first.index(), 0);
//! assert_eq!(first.to_string(), "Card(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of the card in the dealt deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
