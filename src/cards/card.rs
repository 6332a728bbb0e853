//! Card instances - runtime card state.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::CardId;

/// Where a card is in the flip/evaluate cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up and part of the current selection.
    Revealed,
    /// Paired with its twin; stays face up for the rest of the session.
    Matched,
}

/// A card in the dealt deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID within the session.
    pub id: CardId,

    /// The symbol printed on the card face.
    pub symbol: Symbol,

    /// Current state. Only the rules engine mutates this.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            state: CardState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == CardState::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Check if two cards carry the same symbol.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }
}
