//! Identifier newtypes.
//!
//! - `CardId`: a card's identity within one deck (`0..2 * pair_count`)
//! - `RoundId`: generation counter, bumped on every reset
//! - `TimerToken`: cancellation token carried by every scheduled callback
//!
//! Tokens are allocated from a single monotonically increasing counter owned
//! by the game state, so a token is never reused, even across rounds.

use serde::{Deserialize, Serialize};

/// Identity of a card within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Round generation. The first round dealt by a controller is `RoundId(1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// The round that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Cancellation token for a scheduled callback.
///
/// The game state remembers which tokens are live; a callback whose token
/// is no longer live is rejected without touching the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Allocates timer tokens. Never hands out the same token twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounter {
    last: u64,
}

impl TokenCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh token.
    pub fn allocate(&mut self) -> TimerToken {
        self.last += 1;
        TimerToken(self.last)
    }
}
