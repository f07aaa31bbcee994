//! Round lifecycle.

use serde::{Deserialize, Serialize};

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCause {
    /// Every pair was matched.
    Completed,
    /// The clock ran out first.
    Expired,
}

/// Lifecycle of a round: `NotStarted -> Running -> Ended`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    /// Dealt, waiting for the first selection.
    #[default]
    NotStarted,
    /// Clock running.
    Running,
    /// Terminal.
    Ended(EndCause),
}

impl RoundStatus {
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, RoundStatus::Running)
    }

    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, RoundStatus::Ended(_))
    }

    /// The terminal cause, if the round has ended.
    #[must_use]
    pub const fn end_cause(self) -> Option<EndCause> {
        match self {
            RoundStatus::Ended(cause) => Some(cause),
            _ => None,
        }
    }
}
