//! Outcome events emitted to the host.
//!
//! The engine never renders anything. After every intent or scheduled
//! callback it reports what happened as `GameEvent`s; the host re-renders
//! from a snapshot.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Render seconds as a zero-padded `MM:SS` clock.
///
/// Minutes are not wrapped into hours.
///
/// ```
/// use rust_memory::events::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(65), "01:05");
/// assert_eq!(format_clock(6000), "100:00");
/// ```
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Final counters of a completed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOverSummary {
    /// Clock at completion, penalties included.
    pub elapsed_seconds: u64,
    /// Two-card attempts made.
    pub moves: u32,
    /// Peeks used, free ones included.
    pub peek_count: u32,
}

impl std::fmt::Display for GameOverSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Congratulations! You've completed the game in {} with {} moves and {} peeks.",
            format_clock(self.elapsed_seconds),
            self.moves,
            self.peek_count
        )
    }
}

/// Something the host may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The session clock advanced by one second.
    Tick { elapsed_seconds: u64 },

    /// A two-card comparison settled.
    ///
    /// A match settles as soon as the second card is flipped; a mismatch
    /// settles when the pair is hidden again.
    CardsResolved {
        first: CardId,
        second: CardId,
        matched: bool,
    },

    /// A peek revealed the board. `penalty_seconds` is zero for free peeks.
    PeekStarted { peek_count: u32, penalty_seconds: u64 },

    /// The peek window closed and unmatched cards are face down again.
    PeekEnded,

    /// Every pair is matched. Fires once per session.
    GameOver(GameOverSummary),
}

impl GameEvent {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver(_))
    }

    #[must_use]
    pub fn is_tick(&self) -> bool {
        matches!(self, GameEvent::Tick { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(599), "09:59");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_summary_message() {
        let summary = GameOverSummary {
            elapsed_seconds: 83,
            moves: 21,
            peek_count: 2,
        };
        assert_eq!(
            summary.to_string(),
            "Congratulations! You've completed the game in 01:23 with 21 moves and 2 peeks."
        );
    }

    #[test]
    fn test_predicates() {
        let over = GameEvent::GameOver(GameOverSummary {
            elapsed_seconds: 1,
            moves: 15,
            peek_count: 0,
        });
        assert!(over.is_game_over());
        assert!(!over.is_tick());
        assert!(GameEvent::Tick { elapsed_seconds: 1 }.is_tick());
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::CardsResolved {
            first: CardId::new(3),
            second: CardId::new(11),
            matched: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
