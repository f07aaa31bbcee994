//! Notifications for the presentation layer.
//!
//! Every state transition reports what happened as a list of `GameEvent`s.
//! The engine never formats user-facing text; the presentation layer maps
//! events (notably `RoundExpired` and `RoundCompleted`) to its own messages.

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::entity::{CardId, RoundId};
use crate::rules::Difficulty;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh deck was dealt.
    RoundReset { round: RoundId, difficulty: Difficulty },

    /// The first selection of the round started the clock.
    RoundStarted { round: RoundId },

    /// A card was turned face-up.
    CardRevealed { index: usize, card: CardId },

    /// A revealed pair matched and stays face-up.
    MatchFound { first: usize, second: usize, symbol: Symbol },

    /// A revealed pair did not match and was turned back.
    MismatchResolved { first: usize, second: usize },

    /// One second passed.
    ClockTicked { seconds_remaining: u32 },

    /// Time ran out before every pair was matched.
    RoundExpired { round: RoundId },

    /// Every pair was matched.
    RoundCompleted { round: RoundId, score: u32 },
}

impl GameEvent {
    /// Check if this event ends a round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::RoundExpired { .. } | GameEvent::RoundCompleted { .. })
    }
}
