//! Countdown clock of a round.
//!
//! `Idle -> Running -> Expired | Completed`
//!
//! The clock is started by the first accepted selection, not when the round
//! is dealt. While running, each tick removes one whole second. Reaching zero
//! moves it to `Expired`; `complete` moves it to `Completed`. Both are
//! terminal: the tick token is dropped and every later tick is ignored.

use serde::{Deserialize, Serialize};

use crate::core::entity::TimerToken;

/// Phase of the round clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockPhase {
    #[default]
    Idle,
    Running,
    Expired,
    Completed,
}

/// Result of delivering a tick to the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or the token is not the clock's live token.
    Ignored,
    /// One second removed; time is left.
    Ticked { seconds_remaining: u32 },
    /// The last second was removed.
    Expired,
}

/// Countdown clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    phase: ClockPhase,
    seconds_remaining: u32,
    time_budget: u32,
    token: Option<TimerToken>,
}

impl RoundClock {
    /// Create an idle clock holding the full budget.
    #[must_use]
    pub fn new(time_budget_seconds: u32) -> Self {
        Self {
            phase: ClockPhase::Idle,
            seconds_remaining: time_budget_seconds,
            time_budget: time_budget_seconds,
            token: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn time_budget(&self) -> u32 {
        self.time_budget
    }

    /// Seconds elapsed since the clock started.
    #[must_use]
    pub fn seconds_elapsed(&self) -> u32 {
        self.time_budget - self.seconds_remaining
    }

    /// Token of the live tick timer, while running.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.token
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }

    /// Start the countdown. Only an idle clock can start.
    pub fn start(&mut self, token: TimerToken) -> bool {
        if self.phase != ClockPhase::Idle {
            return false;
        }
        self.phase = ClockPhase::Running;
        self.token = Some(token);
        true
    }

    /// Deliver one tick.
    pub fn tick(&mut self, token: TimerToken) -> TickOutcome {
        if !self.is_running() || self.token != Some(token) {
            return TickOutcome::Ignored;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.phase = ClockPhase::Expired;
            self.token = None;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked {
                seconds_remaining: self.seconds_remaining,
            }
        }
    }

    /// Stop the clock because the round was completed.
    ///
    /// Returns the token of the tick timer to cancel.
    pub fn complete(&mut self) -> Option<TimerToken> {
        if !self.is_running() {
            return None;
        }
        self.phase = ClockPhase::Completed;
        self.token.take()
    }
}
