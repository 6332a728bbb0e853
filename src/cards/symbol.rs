//! Card symbols.
//!
//! The palette is fixed: 15 distinct glyphs, each dealt exactly twice.

use serde::{Deserialize, Serialize};

/// The glyph palette, indexed by `Symbol`.
pub const PALETTE: [&str; 15] = [
    "✨", "🎈", "🍰", "🎁", "🎉", "🔔", "🎄", "🍬", "🍭", "🌟", "🍓", "🍎", "🍒", "🍇", "🥥",
];

/// Number of distinct symbols (and therefore pairs) in a deck.
pub const PAIR_COUNT: usize = PALETTE.len();

/// A symbol from the fixed palette.
///
/// Symbols are opaque to the rules: two cards match exactly when their
/// symbols are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(u8);

impl Symbol {
    /// Look up a symbol by palette index.
    ///
    /// Returns `None` if the index is outside the palette.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < PAIR_COUNT).then(|| Self(index as u8))
    }

    /// Iterate over every symbol in palette order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..PAIR_COUNT as u8).map(Symbol)
    }

    /// Palette index of this symbol.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The glyph a host renders for this symbol.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        PALETTE[self.index()]
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
