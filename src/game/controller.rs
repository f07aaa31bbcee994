//! Drives a `GameState` with a virtual-time `Scheduler`.
//!
//! The controller is the single writer of a session. It feeds commands to
//! the reducer, swaps in the returned state, and carries out the timer
//! requests of every transition. Hosts call:
//!
//! - `select_card` when a card is clicked
//! - `reset` / `set_difficulty` from their controls
//! - `advance` from their frame or timer loop, with the elapsed time
//!
//! ## Example
//!
//! ```
//! use memory_match::core::EngineConfig;
//! use memory_match::game::{GameController, GameEvent};
//!
//! let mut game = GameController::new(EngineConfig::new().with_seed(7)).unwrap();
//!
//! let partner = game.state().deck().partner_of(0).unwrap();
//! game.select_card(0);
//! game.select_card(partner);
//!
//! let events = game.advance(500);
//! assert!(events.iter().any(|e| matches!(e, GameEvent::MatchFound { .. })));
//! assert_eq!(game.snapshot().match_count, 1);
//! ```

use super::event::GameEvent;
use super::scheduler::{ScheduledTimer, Scheduler, TimerKind};
use super::snapshot::Snapshot;
use super::state::{Command, GameState, Transition};
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::rules::Difficulty;

/// A game session.
#[derive(Clone, Debug)]
pub struct GameController {
    state: GameState,
    scheduler: Scheduler,
}

impl GameController {
    /// Validate the configuration and deal the first round.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            state: GameState::new(config)?,
            scheduler: Scheduler::new(),
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Timers waiting to fire, in firing order.
    pub fn pending_timers(&self) -> impl Iterator<Item = &ScheduledTimer> {
        self.scheduler.iter()
    }

    /// Virtual time at which the next timer fires.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.scheduler.next_due_ms()
    }

    /// Turn the card at `index` face-up.
    ///
    /// Ignored selections return no events.
    pub fn select_card(&mut self, index: usize) -> Vec<GameEvent> {
        let transition = self.state.select(index);
        self.commit(transition)
    }

    /// Deal a fresh round at the current difficulty, cancelling every
    /// pending timer.
    pub fn reset(&mut self) -> Result<Vec<GameEvent>> {
        let transition = self.state.reset()?;
        Ok(self.commit(transition))
    }

    /// Switch difficulty and deal a fresh round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<Vec<GameEvent>> {
        let transition = self.state.set_difficulty(difficulty)?;
        Ok(self.commit(transition))
    }

    /// Apply any command.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<GameEvent>> {
        let transition = self.state.reduce(command)?;
        Ok(self.commit(transition))
    }

    /// Move virtual time forward by `elapsed_ms`, firing every timer that
    /// falls due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        let target = self.scheduler.now_ms().saturating_add(elapsed_ms);
        let mut events = Vec::new();

        while let Some(timer) = self.scheduler.pop_due(target) {
            let transition = match timer.kind {
                TimerKind::ClockTick => self.state.tick(timer.token),
                TimerKind::Resolution => self.state.resolve(timer.token),
            };
            events.extend(self.commit(transition));
        }

        self.scheduler.advance_to(target);
        events
    }

    /// Advance just far enough for the pending pair resolution to fire.
    ///
    /// Clock ticks due before it fire too. Does nothing when no pair is
    /// pending.
    pub fn settle(&mut self) -> Vec<GameEvent> {
        let Some(token) = self.state.table().pending().map(|p| p.token) else {
            return Vec::new();
        };
        match self.scheduler.due_ms(token) {
            Some(due) => self.advance(due.saturating_sub(self.now_ms())),
            None => Vec::new(),
        }
    }

    fn commit(&mut self, transition: Transition) -> Vec<GameEvent> {
        let Transition {
            state, events, timers, ..
        } = transition;

        for request in timers {
            self.scheduler.apply(request);
        }
        self.state = state;
        events
    }
}
