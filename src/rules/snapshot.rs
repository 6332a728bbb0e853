//! Read-only projections for the host to render.

use serde::{Deserialize, Serialize};

use super::session::GamePhase;
use crate::cards::{Card, CardState, Deck, Symbol};
use crate::core::CardId;

/// How a card should be drawn right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Hidden,
    /// Face up as part of the current selection.
    Revealed,
    /// Face up only because a peek is active.
    Peeked,
    Matched,
}

impl CardFace {
    /// Project a card's state, with an active peek showing every unmatched card.
    #[must_use]
    pub fn of(card: &Card, peeking: bool) -> Self {
        match card.state {
            CardState::Matched => CardFace::Matched,
            _ if peeking => CardFace::Peeked,
            CardState::Revealed => CardFace::Revealed,
            CardState::Hidden => CardFace::Hidden,
        }
    }

    #[must_use]
    pub fn is_face_up(self) -> bool {
        self != CardFace::Hidden
    }
}

/// A freshly dealt card, for laying out the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealtCard {
    pub id: CardId,
    pub symbol: Symbol,
}

/// The board as dealt at the start of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub cards: Vec<DealtCard>,
}

impl DeckSnapshot {
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            cards: deck
                .iter()
                .map(|card| DealtCard {
                    id: card.id,
                    symbol: card.symbol,
                })
                .collect(),
        }
    }

    /// IDs of the two cards carrying `symbol`.
    #[must_use]
    pub fn pair_of(&self, symbol: Symbol) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.id)
            .collect()
    }
}

/// One card as currently visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub symbol: Symbol,
    pub face: CardFace,
}

/// Everything the host needs to re-render after an intent or tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cards: Vec<CardView>,
    pub phase: GamePhase,
    pub moves: u32,
    pub matched_pairs: u32,
    pub elapsed_seconds: u64,
    pub peek_count: u32,
    pub started: bool,
    pub finished: bool,
    pub peeking: bool,
}

impl SessionSnapshot {
    /// Look up a card's view by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardView> {
        self.cards.get(id.index())
    }

    /// Face of a card, `None` for an unknown ID.
    #[must_use]
    pub fn face(&self, id: CardId) -> Option<CardFace> {
        self.card(id).map(|c| c.face)
    }

    /// Count cards showing a given face.
    #[must_use]
    pub fn count_faces(&self, face: CardFace) -> usize {
        self.cards.iter().filter(|c| c.face == face).count()
    }
}
