//! Game state and the reducer that advances it.
//!
//! ## Immutable Transitions
//!
//! `GameState` is never mutated in place by the engine. Each stimulus
//! (selection, timer firing, reset, difficulty change) is a [`Command`];
//! [`GameState::reduce`] returns a [`Transition`] holding a new state, the
//! events it produced, and the timer requests the driver must carry out.
//! The deck and history use `im` persistent structures, so producing the
//! new state is O(1) in the deck size.
//!
//! ## Cancellation
//!
//! Every scheduled callback carries a `TimerToken`. The state remembers the
//! live ones (the clock's tick token and the pending resolution's token)
//! and rejects any `Tick` or `Resolve` whose token is not live. A reset
//! allocates fresh tokens and requests `CancelAll`, so a callback left over
//! from a superseded round can never touch the new one.

use std::sync::Arc;

use im::Vector;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::scheduler::{TimerKind, TimerRequest};
use super::snapshot::{CardView, Snapshot};
use crate::cards::{Deck, DeckBuilder};
use crate::core::config::EngineConfig;
use crate::core::entity::{CardId, RoundId, TimerToken, TokenCounter};
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::round::{
    EndCause, IgnoreReason, Resolved, RoundClock, RoundStatus, Selected, Table, TickOutcome, TurnResolver,
};
use crate::rules::{score, Difficulty, DifficultyParams};

/// A stimulus for the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// The player clicked the card at this deck position.
    Select(usize),
    /// A clock tick timer fired.
    Tick(TimerToken),
    /// A pair resolution timer fired.
    Resolve(TimerToken),
    /// Deal a fresh round at the current difficulty.
    Reset,
    /// Switch difficulty and deal a fresh round.
    SetDifficulty(Difficulty),
}

/// One accepted selection, kept for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub round: RoundId,
    pub index: usize,
    pub card: CardId,
    /// Moves completed before this selection.
    pub at_move: u32,
}

/// Result of applying a command.
#[derive(Clone, Debug)]
pub struct Transition {
    /// The new state.
    pub state: GameState,
    /// What happened, in order.
    pub events: Vec<GameEvent>,
    /// Timer bookkeeping for the driver, in order.
    pub timers: Vec<TimerRequest>,
    /// Set when a selection was ignored.
    pub ignored: Option<IgnoreReason>,
}

impl Transition {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            events: Vec::new(),
            timers: Vec::new(),
            ignored: None,
        }
    }

    fn ignored(state: &GameState, reason: IgnoreReason) -> Self {
        Self {
            ignored: Some(reason),
            ..Self::unchanged(state)
        }
    }

    /// Check if the command changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.is_empty() && self.timers.is_empty()
    }
}

/// Complete state of a game session.
#[derive(Clone, Debug)]
pub struct GameState {
    config: Arc<EngineConfig>,
    difficulty: Difficulty,
    params: DifficultyParams,
    round: RoundId,
    status: RoundStatus,
    table: Table,
    clock: RoundClock,
    move_count: u32,
    match_count: u32,
    final_score: Option<u32>,
    tokens: TokenCounter,
    rng: GameRng,
    history: Vector<SelectionRecord>,
}

impl GameState {
    /// Validate the configuration and deal the first round.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("session seed {}", rng.seed());
        let difficulty = config.initial_difficulty;
        let params = config.parameters_for(difficulty);

        let mut state = Self {
            config: Arc::new(config),
            difficulty,
            params,
            round: RoundId::default(),
            status: RoundStatus::NotStarted,
            table: Table::default(),
            clock: RoundClock::new(params.time_budget_seconds),
            move_count: 0,
            match_count: 0,
            final_score: None,
            tokens: TokenCounter::new(),
            rng,
            history: Vector::new(),
        };
        state.deal()?;
        Ok(state)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn params(&self) -> &DifficultyParams {
        &self.params
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.table.deck()
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.clock.seconds_remaining()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.params.pair_count
    }

    /// Final score; set only when the round was completed.
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Accepted selections of the current round.
    #[must_use]
    pub fn history(&self) -> &Vector<SelectionRecord> {
        &self.history
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let selection = self.table.selection();
        let cards = self
            .deck()
            .iter()
            .enumerate()
            .map(|(index, card)| CardView {
                id: card.id(),
                symbol: card.symbol(),
                name: self.config.catalog.name(card.symbol()).map(str::to_owned),
                matched: card.is_matched(),
                face_up: selection.contains(index) && !card.is_matched(),
            })
            .collect();

        Snapshot {
            round: self.round,
            difficulty: self.difficulty,
            status: self.status,
            cards,
            grid_columns: self.params.grid_columns,
            grid_rows: self.params.grid_rows(),
            seconds_remaining: self.clock.seconds_remaining(),
            move_count: self.move_count,
            match_count: self.match_count,
            pair_count: self.params.pair_count,
            checking: self.table.is_checking(),
            final_score: self.final_score,
        }
    }

    // === Reducer ===

    /// Apply a command, producing the next state.
    ///
    /// Only `Reset` and `SetDifficulty` deal a deck and can fail, and only
    /// for a configuration that did not pass validation.
    pub fn reduce(&self, command: Command) -> Result<Transition> {
        match command {
            Command::Select(index) => Ok(self.select(index)),
            Command::Tick(token) => Ok(self.tick(token)),
            Command::Resolve(token) => Ok(self.resolve(token)),
            Command::Reset => self.reset(),
            Command::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
        }
    }

    /// Turn a card face-up. The first accepted selection starts the round.
    #[must_use]
    pub fn select(&self, index: usize) -> Transition {
        let mut next = self.clone();
        let resolver = next.resolver();

        let selected = match resolver.select(&mut next.table, next.status, index, &mut next.tokens) {
            Ok(selected) => selected,
            Err(reason) => {
                debug!("{}: selection of {} ignored: {:?}", self.round, index, reason);
                return Transition::ignored(self, reason);
            }
        };

        let mut events = Vec::new();
        let mut timers = Vec::new();

        if next.status == RoundStatus::NotStarted {
            let token = next.tokens.allocate();
            next.status = RoundStatus::Running;
            next.clock.start(token);
            timers.push(TimerRequest::Schedule {
                token,
                kind: TimerKind::ClockTick,
                delay_ms: next.config.tick_interval_ms,
            });
            events.push(GameEvent::RoundStarted { round: next.round });
            info!("{} started ({}, {}s)", next.round, next.difficulty, next.clock.seconds_remaining());
        }

        next.history.push_back(SelectionRecord {
            round: next.round,
            index,
            card: selected.card(),
            at_move: next.move_count,
        });
        events.push(GameEvent::CardRevealed {
            index,
            card: selected.card(),
        });

        if let Selected::Second { pending, .. } = selected {
            next.move_count += 1;
            timers.push(TimerRequest::Schedule {
                token: pending.token,
                kind: TimerKind::Resolution,
                delay_ms: pending.delay_ms,
            });
            debug!(
                "{}: move {} reveals {} and {}: {:?}",
                next.round, next.move_count, pending.first, pending.second, pending.outcome
            );
        }

        Transition {
            state: next,
            events,
            timers,
            ignored: None,
        }
    }

    /// Deliver a clock tick.
    #[must_use]
    pub fn tick(&self, token: TimerToken) -> Transition {
        if !self.status.is_running() {
            return Transition::unchanged(self);
        }

        let mut next = self.clone();
        match next.clock.tick(token) {
            TickOutcome::Ignored => Transition::unchanged(self),
            TickOutcome::Ticked { seconds_remaining } => {
                trace!("{}: {}s remaining", next.round, seconds_remaining);
                let delay_ms = next.config.tick_interval_ms;
                Transition {
                    state: next,
                    events: vec![GameEvent::ClockTicked { seconds_remaining }],
                    timers: vec![TimerRequest::Schedule {
                        token,
                        kind: TimerKind::ClockTick,
                        delay_ms,
                    }],
                    ignored: None,
                }
            }
            TickOutcome::Expired => {
                next.status = RoundStatus::Ended(EndCause::Expired);
                let mut timers = Vec::new();
                if let Some(pending) = next.table.discard_pending() {
                    timers.push(TimerRequest::Cancel(pending));
                }
                info!(
                    "{} expired after {}s, {} moves, {}/{} pairs",
                    next.round,
                    next.clock.time_budget(),
                    next.move_count,
                    next.match_count,
                    next.params.pair_count
                );
                let round = next.round;
                Transition {
                    state: next,
                    events: vec![
                        GameEvent::ClockTicked { seconds_remaining: 0 },
                        GameEvent::RoundExpired { round },
                    ],
                    timers,
                    ignored: None,
                }
            }
        }
    }

    /// Deliver a pair resolution.
    #[must_use]
    pub fn resolve(&self, token: TimerToken) -> Transition {
        if !self.status.is_running() {
            return Transition::unchanged(self);
        }

        let mut next = self.clone();
        let resolver = next.resolver();
        let Some(resolved) = resolver.resolve(&mut next.table, token) else {
            trace!("{}: stale resolution {} dropped", self.round, token);
            return Transition::unchanged(self);
        };

        let mut events = Vec::new();
        let mut timers = Vec::new();

        match resolved {
            Resolved::Match { first, second, symbol } => {
                next.match_count += 1;
                events.push(GameEvent::MatchFound { first, second, symbol });
                if let Some(score) = next.complete_if_done() {
                    if let Some(tick) = next.clock.complete() {
                        timers.push(TimerRequest::Cancel(tick));
                    }
                    events.push(GameEvent::RoundCompleted {
                        round: next.round,
                        score,
                    });
                }
            }
            Resolved::Mismatch { first, second } => {
                events.push(GameEvent::MismatchResolved { first, second });
            }
        }

        Transition {
            state: next,
            events,
            timers,
            ignored: None,
        }
    }

    /// Deal a fresh round at the current difficulty.
    pub fn reset(&self) -> Result<Transition> {
        let mut next = self.clone();
        next.deal()?;
        info!("{} dealt ({}, {} pairs)", next.round, next.difficulty, next.params.pair_count);

        let event = GameEvent::RoundReset {
            round: next.round,
            difficulty: next.difficulty,
        };
        Ok(Transition {
            state: next,
            events: vec![event],
            timers: vec![TimerRequest::CancelAll],
            ignored: None,
        })
    }

    /// Switch difficulty, then deal a fresh round.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<Transition> {
        let mut changed = self.clone();
        changed.difficulty = difficulty;
        changed.params = changed.config.parameters_for(difficulty);
        changed.reset()
    }

    // === Internals ===

    fn resolver(&self) -> TurnResolver {
        TurnResolver::new(self.config.match_reveal_delay_ms, self.params.mismatch_delay_ms)
    }

    /// Replace the deck and clear every per-round counter.
    fn deal(&mut self) -> Result<()> {
        let mut deal_rng = self.rng.fork();
        let deck = DeckBuilder::new(&self.config.catalog, &self.config.difficulties)
            .build(self.difficulty, &mut deal_rng)?;

        self.round = self.round.next();
        self.status = RoundStatus::NotStarted;
        self.table = Table::new(deck);
        self.clock = RoundClock::new(self.params.time_budget_seconds);
        self.move_count = 0;
        self.match_count = 0;
        self.final_score = None;
        self.history = Vector::new();
        Ok(())
    }

    /// End the round if every pair is matched, returning the final score.
    fn complete_if_done(&mut self) -> Option<u32> {
        let pairs = self.params.pair_count;
        if pairs == 0 || self.match_count as usize != pairs || !self.status.is_running() {
            return None;
        }

        let final_score = score(self.clock.seconds_remaining(), self.move_count);
        self.status = RoundStatus::Ended(EndCause::Completed);
        self.final_score = Some(final_score);
        info!(
            "{} completed in {} moves and {}s with {}s left: score {}",
            self.round,
            self.move_count,
            self.clock.seconds_elapsed(),
            self.clock.seconds_remaining(),
            final_score
        );
        Some(final_score)
    }
}
