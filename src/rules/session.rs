//! Per-session counters and the current selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Where a session is in the flip/evaluate cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing flipped or peeked yet.
    Idle,
    /// Zero or one card face up; the next flip is accepted.
    AwaitingSelection,
    /// Two cards face up; flips are rejected until the pair settles.
    Evaluating,
    /// Every pair matched and game over announced.
    Finished,
}

/// Counters for one play-through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSession {
    /// Two-card attempts, matched or not.
    pub moves: u32,

    /// Pairs matched so far.
    pub matched_pairs: u32,

    /// Set by the first accepted flip or peek.
    pub started: bool,

    /// Set when game over is announced. Final for the session.
    pub finished: bool,

    /// Peeks used, free ones included.
    pub peek_count: u32,
}

/// The revealed, not-yet-matched cards being compared.
///
/// Never holds more than two cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: SmallVec<[CardId; 2]>,
}

impl Selection {
    pub const CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, id: CardId) {
        debug_assert!(!self.is_full(), "selection already holds two cards");
        debug_assert!(!self.contains(id), "{id} already selected");
        self.cards.push(id);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::CAPACITY
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }

    /// The two selected cards, in flip order, once the selection is full.
    #[must_use]
    pub fn pair(&self) -> Option<(CardId, CardId)> {
        match self.cards.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.cards
    }
}
