//! Virtual-time timer queue.
//!
//! Reveal delays, mismatch delays and clock ticks are scheduled here, each
//! under a `TimerToken`. Time only moves when the host calls `advance`, so
//! every round is deterministic. Timers fire in due-time order; timers due
//! at the same instant fire in the order they were scheduled.

use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::entity::TimerToken;

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// One clock second.
    ClockTick,
    /// Delayed resolution of a revealed pair.
    Resolution,
}

/// Timer bookkeeping requested by a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerRequest {
    Schedule {
        token: TimerToken,
        kind: TimerKind,
        delay_ms: u64,
    },
    Cancel(TimerToken),
    CancelAll,
}

/// A timer waiting to fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTimer {
    pub token: TimerToken,
    pub kind: TimerKind,
    pub due_ms: u64,
}

/// Timer queue keyed by `(due_ms, sequence)`.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    sequence: u64,
    queue: BTreeMap<(u64, u64), ScheduledTimer>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the next timer.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Due time of the first queued timer with this token.
    #[must_use]
    pub fn due_ms(&self, token: TimerToken) -> Option<u64> {
        self.queue.values().find(|t| t.token == token).map(|t| t.due_ms)
    }

    /// Queued timers in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTimer> {
        self.queue.values()
    }

    /// Apply one request from a transition.
    pub fn apply(&mut self, request: TimerRequest) {
        match request {
            TimerRequest::Schedule { token, kind, delay_ms } => self.schedule(token, kind, delay_ms),
            TimerRequest::Cancel(token) => {
                self.cancel(token);
            }
            TimerRequest::CancelAll => self.cancel_all(),
        }
    }

    /// Queue a timer `delay_ms` after the current time.
    pub fn schedule(&mut self, token: TimerToken, kind: TimerKind, delay_ms: u64) {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        self.sequence += 1;
        self.queue.insert((due_ms, self.sequence), ScheduledTimer { token, kind, due_ms });
        trace!("scheduled {:?} {} at {}ms", kind, token, due_ms);
    }

    /// Remove every timer with this token. Returns how many were removed.
    pub fn cancel(&mut self, token: TimerToken) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, t| t.token != token);
        before - self.queue.len()
    }

    /// Remove every queued timer.
    pub fn cancel_all(&mut self) {
        if !self.queue.is_empty() {
            trace!("cancelled {} pending timers", self.queue.len());
        }
        self.queue.clear();
    }

    /// Pop the next timer due at or before `until_ms`, moving the current
    /// time to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledTimer> {
        let (&key, _) = self.queue.iter().next()?;
        if key.0 > until_ms {
            return None;
        }
        let timer = self.queue.remove(&key)?;
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer)
    }

    /// Move the current time forward. Never moves it backwards.
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}
