//! Deck generation.
//!
//! A deck is a uniformly random permutation of the fixed multiset
//! "every palette symbol, twice". It is always built by permuting that
//! multiset, never by sampling, so the pairing invariant holds for every
//! deck the generator can produce.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardState};
use super::symbol::{Symbol, PAIR_COUNT};
use crate::core::{CardId, GameRng};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Shuffle a slice in place with the Fisher–Yates algorithm.
///
/// Walks from the last index down, swapping each element with one drawn
/// uniformly from `[0, i]`. Every permutation is equally likely, up to the
/// quality of `rng`.
pub fn fisher_yates<T>(slice: &mut [T], rng: &mut GameRng) {
    // i == 0 can only swap with itself.
    for i in (1..slice.len()).rev() {
        let j = rng.gen_index(i);
        slice.swap(i, j);
    }
}

/// The ordered cards of one session.
///
/// Uses `im::Vector` so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Deal a freshly shuffled deck.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut symbols: Vec<Symbol> = Symbol::all().flat_map(|s| [s, s]).collect();
        fisher_yates(&mut symbols, rng);
        Self::from_symbols(symbols)
    }

    /// Build a deck in the given order, every card face down.
    ///
    /// Card IDs follow position. Callers are responsible for passing a
    /// paired multiset; `deal` is the only constructor the engine uses.
    #[must_use]
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId::new(i as u32), symbol))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs this deck holds.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Set a card's state. Returns `false` if the ID is not in this deck.
    pub(crate) fn set_state(&mut self, id: CardId, state: CardState) -> bool {
        match self.cards.get_mut(id.index()) {
            Some(card) => {
                card.state = state;
                true
            }
            None => false,
        }
    }

    /// Hide every card that is not matched. Returns how many cards changed.
    pub(crate) fn hide_unmatched(&mut self) -> usize {
        let mut changed = 0;
        for card in self.cards.iter_mut() {
            if card.state == CardState::Revealed {
                card.state = CardState::Hidden;
                changed += 1;
            }
        }
        changed
    }

    /// Iterate over cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Count cards in the given state.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state == state).count()
    }

    /// Check if every card has been matched.
    #[must_use]
    pub fn is_fully_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// How many cards carry each symbol, indexed by palette position.
    #[must_use]
    pub fn symbol_counts(&self) -> [usize; PAIR_COUNT] {
        let mut counts = [0; PAIR_COUNT];
        for card in self.cards.iter() {
            counts[card.symbol.index()] += 1;
        }
        counts
    }

    /// Check the pairing invariant: every palette symbol appears exactly twice.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.cards.len() == DECK_SIZE && self.symbol_counts().iter().all(|&n| n == 2)
    }
}
