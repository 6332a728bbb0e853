//! The game state machine.
//!
//! `MemoryGame` is the only mutator of cards, counters and the clock. Hosts
//! send it intents (`flip`, `peek`, `reset`), drive logical time with
//! `advance`, and render the snapshots it returns.
//!
//! ## Cycle
//!
//! ```text
//! Idle -> AwaitingSelection -> Evaluating -> AwaitingSelection -> ... -> Finished
//! ```
//!
//! A match settles immediately. A mismatch keeps both cards face up for
//! `mismatch_delay` and rejects further flips until they are hidden again.
//! The final match schedules game over after `game_over_delay`.
//!
//! ## Peeks over a pending mismatch
//!
//! A peek takes precedence. A mismatch that settles during the peek still
//! hides its pair underneath, but the pair keeps showing as `Peeked` until
//! the peek ends. When the peek ends every unmatched card is hidden, the
//! selection is cleared, and a mismatch still pending is settled early.
//!
//! ```
//! use rust_memory::{EngineConfig, MemoryGame};
//!
//! let mut game = MemoryGame::new(EngineConfig::default().with_seed(1)).unwrap();
//! let deck = game.deck_snapshot();
//!
//! let symbol = deck.cards[0].symbol;
//! let pair = deck.pair_of(symbol);
//! game.flip(pair[0]);
//! let snapshot = game.flip(pair[1]);
//!
//! assert_eq!(snapshot.moves, 1);
//! assert_eq!(snapshot.matched_pairs, 1);
//! ```

use std::time::Duration;

use tracing::{debug, info, trace};

use super::peek::{peek_penalty, PeekController};
use super::session::{GamePhase, GameSession, Selection};
use super::snapshot::{CardFace, CardView, DeckSnapshot, SessionSnapshot};
use super::timer::Timer;
use crate::cards::{CardState, Deck};
use crate::core::{CardId, ConfigError, EngineConfig, GameRng};
use crate::events::{GameEvent, GameObserver, GameOverSummary};
use crate::scheduler::{Scheduler, Task, TaskHandle, VirtualScheduler};

/// A memory game: deck, counters, clock and pending callbacks.
pub struct MemoryGame<S: Scheduler = VirtualScheduler> {
    config: EngineConfig,
    rng: GameRng,
    scheduler: S,
    deck: Deck,
    session: GameSession,
    selection: Selection,
    timer: Timer,
    peek: PeekController,
    pending_mismatch: Option<TaskHandle>,
    pending_game_over: Option<TaskHandle>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl MemoryGame<VirtualScheduler> {
    /// Create a game driven by a `VirtualScheduler` and deal the first session.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_scheduler(config, VirtualScheduler::new())
    }
}

impl<S: Scheduler> MemoryGame<S> {
    /// Create a game on a caller-supplied scheduler and deal the first session.
    ///
    /// The game assumes it is the scheduler's only user.
    pub fn with_scheduler(config: EngineConfig, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = Deck::deal(&mut rng.fork());
        info!(seed = rng.seed(), "memory game created");

        Ok(Self {
            config,
            rng,
            scheduler,
            deck,
            session: GameSession::default(),
            selection: Selection::new(),
            timer: Timer::new(),
            peek: PeekController::new(),
            pending_mismatch: None,
            pending_game_over: None,
            observers: Vec::new(),
        })
    }

    // === Intents ===

    /// Start a new session: cancel every pending callback, deal a fresh
    /// deck, and zero all counters and the clock.
    pub fn new_session(&mut self) -> DeckSnapshot {
        self.cancel_pending();

        self.deck = Deck::deal(&mut self.rng.fork());
        self.session = GameSession::default();
        self.selection.clear();
        self.timer.reset(&mut self.scheduler);

        debug_assert!(self.deck.is_paired(), "dealt deck breaks pairing");
        info!("new session dealt");
        self.deck_snapshot()
    }

    /// Abandon the current session and start a new one. Valid in any phase.
    pub fn reset(&mut self) -> DeckSnapshot {
        debug!(moves = self.session.moves, matched = self.session.matched_pairs, "session reset");
        self.new_session()
    }

    /// Try to turn a card face up.
    ///
    /// Rejected intents are silent no-ops; the returned snapshot is simply
    /// unchanged.
    pub fn flip(&mut self, id: CardId) -> SessionSnapshot {
        if let Some(reason) = self.flip_rejection(id) {
            trace!(card = %id, reason, "flip ignored");
            return self.snapshot();
        }

        self.ensure_started();
        self.deck.set_state(id, CardState::Revealed);
        self.selection.push(id);
        debug!(card = %id, "card revealed");

        if let Some((first, second)) = self.selection.pair() {
            self.evaluate(first, second);
        }
        self.snapshot()
    }

    /// Reveal every unmatched card for `peek_duration`.
    ///
    /// The first `free_peeks` peeks of a session are free; every later one
    /// adds `peek_penalty_seconds` to the clock. Peeking during an open
    /// window extends it. Still counted while game over is pending, so the
    /// summary includes it; rejected once the session is finished.
    pub fn peek(&mut self) -> SessionSnapshot {
        if self.session.finished {
            trace!("peek ignored: session finished");
            return self.snapshot();
        }

        self.ensure_started();
        self.session.peek_count += 1;

        let penalty = peek_penalty(
            self.session.peek_count,
            self.config.free_peeks,
            self.config.peek_penalty_seconds,
        );
        if penalty > 0 {
            self.timer.add_penalty(penalty);
        }

        let extended = self.peek.begin(&mut self.scheduler, self.config.peek_duration);
        debug!(peek_count = self.session.peek_count, penalty, extended, "peek");

        self.emit(GameEvent::PeekStarted {
            peek_count: self.session.peek_count,
            penalty_seconds: penalty,
        });
        self.snapshot()
    }

    /// Advance logical time, firing every callback that falls due.
    pub fn advance(&mut self, elapsed: Duration) -> SessionSnapshot {
        let until = self
            .scheduler
            .now()
            .checked_add(elapsed)
            .unwrap_or(Duration::MAX);
        while let Some((handle, task)) = self.scheduler.next_due(until) {
            self.dispatch(handle, task);
        }
        self.scheduler.advance_to(until);
        self.snapshot()
    }

    /// Register an observer for every subsequently emitted event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Projections ===

    /// The current board and counters.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let peeking = self.peek.is_active();
        SessionSnapshot {
            cards: self
                .deck
                .iter()
                .map(|card| CardView {
                    id: card.id,
                    symbol: card.symbol,
                    face: CardFace::of(card, peeking),
                })
                .collect(),
            phase: self.phase(),
            moves: self.session.moves,
            matched_pairs: self.session.matched_pairs,
            elapsed_seconds: self.timer.elapsed_seconds(),
            peek_count: self.session.peek_count,
            started: self.session.started,
            finished: self.session.finished,
            peeking,
        }
    }

    /// The current session's deck as dealt.
    #[must_use]
    pub fn deck_snapshot(&self) -> DeckSnapshot {
        DeckSnapshot::from_deck(&self.deck)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.session.finished {
            GamePhase::Finished
        } else if !self.session.started {
            GamePhase::Idle
        } else if self.selection.is_full() {
            GamePhase::Evaluating
        } else {
            GamePhase::AwaitingSelection
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.timer.elapsed_seconds()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn is_peeking(&self) -> bool {
        self.peek.is_active()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // === Internals ===

    fn flip_rejection(&self, id: CardId) -> Option<&'static str> {
        if self.session.finished {
            return Some("session finished");
        }
        let Some(card) = self.deck.get(id) else {
            return Some("unknown card");
        };
        if self.peek.is_active() {
            return Some("peek active");
        }
        match card.state {
            CardState::Matched => Some("already matched"),
            CardState::Revealed => Some("already revealed"),
            CardState::Hidden if self.selection.is_full() => Some("selection full"),
            CardState::Hidden => None,
        }
    }

    fn ensure_started(&mut self) {
        if self.session.started {
            return;
        }
        self.session.started = true;
        self.timer.start(&mut self.scheduler, self.config.tick_interval);
        info!("session started");
    }

    fn evaluate(&mut self, first: CardId, second: CardId) {
        self.session.moves += 1;

        let matched = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };
        debug!(%first, %second, matched, moves = self.session.moves, "pair evaluated");

        if !matched {
            debug_assert!(self.pending_mismatch.is_none(), "mismatch already pending");
            self.pending_mismatch = Some(
                self.scheduler
                    .schedule_once(self.config.mismatch_delay, Task::ResolveMismatch),
            );
            return;
        }

        self.deck.set_state(first, CardState::Matched);
        self.deck.set_state(second, CardState::Matched);
        self.session.matched_pairs += 1;
        debug_assert!(
            self.session.matched_pairs as usize <= self.deck.pair_count(),
            "more pairs matched than dealt"
        );
        self.selection.clear();
        self.emit(GameEvent::CardsResolved {
            first,
            second,
            matched: true,
        });

        if self.session.matched_pairs as usize * 2 == self.deck.len() {
            debug!("board cleared; game over pending");
            self.pending_game_over = Some(
                self.scheduler
                    .schedule_once(self.config.game_over_delay, Task::AnnounceGameOver),
            );
        }
    }

    fn dispatch(&mut self, handle: TaskHandle, task: Task) {
        match task {
            Task::Tick => {
                if let Some(elapsed_seconds) = self.timer.on_tick(handle) {
                    trace!(elapsed_seconds, "tick");
                    self.emit(GameEvent::Tick { elapsed_seconds });
                }
            }
            Task::ResolveMismatch => {
                if self.pending_mismatch == Some(handle) {
                    self.pending_mismatch = None;
                    self.settle_mismatch();
                }
            }
            Task::RestorePeek => {
                if self.peek.on_restore(handle) {
                    self.end_peek();
                }
            }
            Task::AnnounceGameOver => {
                if self.pending_game_over == Some(handle) {
                    self.pending_game_over = None;
                    self.finish();
                }
            }
        }
    }

    fn settle_mismatch(&mut self) {
        let Some((first, second)) = self.selection.pair() else {
            self.selection.clear();
            return;
        };

        for id in [first, second] {
            // Never un-match a card.
            if self.deck.get(id).is_some_and(|card| !card.is_matched()) {
                self.deck.set_state(id, CardState::Hidden);
            }
        }
        self.selection.clear();
        debug!(%first, %second, "mismatch hidden");

        self.emit(GameEvent::CardsResolved {
            first,
            second,
            matched: false,
        });
    }

    fn end_peek(&mut self) {
        if let Some(handle) = self.pending_mismatch.take() {
            self.scheduler.cancel(handle);
            self.settle_mismatch();
        }

        let hidden = self.deck.hide_unmatched();
        self.selection.clear();
        debug!(hidden, "peek ended");
        self.emit(GameEvent::PeekEnded);
    }

    fn finish(&mut self) {
        self.session.finished = true;
        self.timer.stop(&mut self.scheduler);

        let summary = GameOverSummary {
            elapsed_seconds: self.timer.elapsed_seconds(),
            moves: self.session.moves,
            peek_count: self.session.peek_count,
        };
        info!(
            elapsed_seconds = summary.elapsed_seconds,
            moves = summary.moves,
            peek_count = summary.peek_count,
            "game over"
        );
        self.emit(GameEvent::GameOver(summary));
    }

    fn cancel_pending(&mut self) {
        self.timer.stop(&mut self.scheduler);
        self.peek.cancel(&mut self.scheduler);
        for handle in [self.pending_mismatch.take(), self.pending_game_over.take()]
            .into_iter()
            .flatten()
        {
            self.scheduler.cancel(handle);
        }
        debug_assert_eq!(self.scheduler.pending_count(), 0, "callback survived reset");
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl<S: Scheduler> std::fmt::Debug for MemoryGame<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("session", &self.session)
            .field("selection", &self.selection)
            .field("elapsed_seconds", &self.timer.elapsed_seconds())
            .field("peeking", &self.peek.is_active())
            .field("observers", &self.observers.len())
            .finish()
    }
}
