//! Deck generator tests.
//!
//! Property tests for the pairing invariant plus statistical checks that
//! the shuffle is unbiased.

use proptest::prelude::*;
use rust_memory::cards::fisher_yates;
use rust_memory::{Deck, EngineConfig, GameRng, MemoryGame, Symbol, DECK_SIZE, PAIR_COUNT};

proptest! {
    /// Every deck has 30 cards and every symbol exactly twice.
    #[test]
    fn prop_dealt_deck_is_paired(seed in any::<u64>()) {
        let deck = Deck::deal(&mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert!(deck.symbol_counts().iter().all(|&n| n == 2));
        prop_assert!(deck.iter().all(|card| card.is_hidden()));
    }

    /// The shuffle only reorders; it never adds, drops or duplicates.
    #[test]
    fn prop_fisher_yates_is_permutation(
        seed in any::<u64>(),
        data in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut shuffled = data.clone();
        fisher_yates(&mut shuffled, &mut GameRng::new(seed));

        let mut expected = data;
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    /// Every session, including after resets, starts from a paired deck.
    #[test]
    fn prop_every_session_is_paired(seed in any::<u64>(), resets in 0usize..6) {
        let mut game = MemoryGame::new(EngineConfig::default().with_seed(seed)).unwrap();
        for _ in 0..resets {
            game.reset();
        }

        let deck = game.deck_snapshot();
        prop_assert_eq!(deck.cards.len(), DECK_SIZE);
        for symbol in Symbol::all() {
            prop_assert_eq!(deck.pair_of(symbol).len(), 2);
        }
    }
}

/// Each position holds each symbol with probability 2/30.
#[test]
fn test_position_distribution_is_uniform() {
    const TRIALS: usize = 30_000;
    let expected = TRIALS * 2 / DECK_SIZE;

    let mut rng = GameRng::new(2024);
    let mut counts = vec![[0usize; PAIR_COUNT]; DECK_SIZE];

    for _ in 0..TRIALS {
        let deck = Deck::deal(&mut rng);
        for (position, card) in deck.iter().enumerate() {
            counts[position][card.symbol.index()] += 1;
        }
    }

    // +-20% is roughly nine standard deviations.
    let (low, high) = (expected * 8 / 10, expected * 12 / 10);
    for (position, row) in counts.iter().enumerate() {
        for (symbol, &count) in row.iter().enumerate() {
            assert!(
                (low..=high).contains(&count),
                "position {position} symbol {symbol}: {count} not in {low}..={high}"
            );
        }
    }
}

/// All six orderings of three items are equally likely.
#[test]
fn test_small_permutations_are_uniform() {
    const TRIALS: usize = 60_000;
    let mut rng = GameRng::new(99);
    let mut seen = std::collections::HashMap::new();

    for _ in 0..TRIALS {
        let mut items = [0u8, 1, 2];
        fisher_yates(&mut items, &mut rng);
        *seen.entry(items).or_insert(0usize) += 1;
    }

    assert_eq!(seen.len(), 6);
    let expected = TRIALS / 6;
    for (order, count) in seen {
        assert!(
            count.abs_diff(expected) < expected / 10,
            "{order:?} drawn {count} times, expected about {expected}"
        );
    }
}
