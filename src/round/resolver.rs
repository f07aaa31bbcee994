//! Turn resolution: which selections are legal, and what a revealed pair
//! does.
//!
//! A turn reveals two cards. The second reveal evaluates the pair and
//! schedules its resolution:
//!
//! - **Match**: after the reveal delay, both cards are marked matched
//! - **Mismatch**: after the difficulty's mismatch delay, both turn back
//!
//! Until the pending resolution fires, the table is "checking" and every
//! selection is ignored.

use serde::{Deserialize, Serialize};

use super::selection::Selection;
use super::status::RoundStatus;
use crate::cards::{Deck, Symbol};
use crate::core::entity::{CardId, TimerToken, TokenCounter};

/// Why a selection was ignored. Not an error: ignored selections change
/// nothing and emit nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The round is over.
    RoundEnded,
    /// No card at that position.
    OutOfRange,
    /// A revealed pair is still being displayed.
    Checking,
    /// The card is already matched.
    AlreadyMatched,
    /// The card is already face-up.
    AlreadyFaceUp,
    /// Two cards are already face-up.
    SelectionFull,
}

/// Outcome of comparing two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairOutcome {
    Match,
    Mismatch,
}

/// A revealed pair waiting for its delayed resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    pub token: TimerToken,
    pub first: usize,
    pub second: usize,
    pub outcome: PairOutcome,
    pub delay_ms: u64,
}

/// An accepted selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selected {
    /// First card of the turn turned face-up.
    First { index: usize, card: CardId },
    /// Second card turned face-up; the pair now awaits resolution.
    Second {
        index: usize,
        card: CardId,
        pending: PendingResolution,
    },
}

impl Selected {
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Selected::First { index, .. } | Selected::Second { index, .. } => *index,
        }
    }

    #[must_use]
    pub fn card(&self) -> CardId {
        match self {
            Selected::First { card, .. } | Selected::Second { card, .. } => *card,
        }
    }
}

/// A pending resolution that has fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    Match {
        first: usize,
        second: usize,
        symbol: Symbol,
    },
    Mismatch {
        first: usize,
        second: usize,
    },
}

/// Deck, face-up selection, and the pending resolution, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    deck: Deck,
    selection: Selection,
    pending: Option<PendingResolution>,
}

impl Table {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            selection: Selection::new(),
            pending: None,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    /// Check if a revealed pair is still being displayed.
    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending resolution and turn every face-up card back.
    ///
    /// Returns the token of the dropped resolution, so its timer can be
    /// cancelled.
    pub fn discard_pending(&mut self) -> Option<TimerToken> {
        self.selection.clear();
        self.pending.take().map(|p| p.token)
    }
}

/// Applies the turn rules to a `Table`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnResolver {
    match_reveal_delay_ms: u64,
    mismatch_delay_ms: u64,
}

impl TurnResolver {
    #[must_use]
    pub fn new(match_reveal_delay_ms: u64, mismatch_delay_ms: u64) -> Self {
        Self {
            match_reveal_delay_ms,
            mismatch_delay_ms,
        }
    }

    /// Check the selection preconditions, in order.
    pub fn check(&self, table: &Table, status: RoundStatus, index: usize) -> Result<(), IgnoreReason> {
        if status.is_ended() {
            return Err(IgnoreReason::RoundEnded);
        }
        let card = table.deck.get(index).ok_or(IgnoreReason::OutOfRange)?;
        if table.is_checking() {
            return Err(IgnoreReason::Checking);
        }
        if card.is_matched() {
            return Err(IgnoreReason::AlreadyMatched);
        }
        if table.selection.contains(index) {
            return Err(IgnoreReason::AlreadyFaceUp);
        }
        if table.selection.is_full() {
            return Err(IgnoreReason::SelectionFull);
        }
        Ok(())
    }

    /// Compare the cards at two positions.
    #[must_use]
    pub fn evaluate(&self, deck: &Deck, first: usize, second: usize) -> PairOutcome {
        match (deck.get(first), deck.get(second)) {
            (Some(a), Some(b)) if a.pairs_with(b) => PairOutcome::Match,
            _ => PairOutcome::Mismatch,
        }
    }

    /// Delay before a pair with this outcome resolves.
    #[must_use]
    pub fn delay_for(&self, outcome: PairOutcome) -> u64 {
        match outcome {
            PairOutcome::Match => self.match_reveal_delay_ms,
            PairOutcome::Mismatch => self.mismatch_delay_ms,
        }
    }

    /// Turn the card at `index` face-up.
    ///
    /// On the second card of a turn the pair is evaluated and a pending
    /// resolution is created with a token from `tokens`. The table is left
    /// untouched when the selection is ignored.
    pub fn select(
        &self,
        table: &mut Table,
        status: RoundStatus,
        index: usize,
        tokens: &mut TokenCounter,
    ) -> Result<Selected, IgnoreReason> {
        self.check(table, status, index)?;
        let card = table.deck.get(index).map(|c| c.id()).ok_or(IgnoreReason::OutOfRange)?;

        if !table.selection.push(index) {
            return Err(IgnoreReason::SelectionFull);
        }

        let Some((first, second)) = table.selection.pair() else {
            return Ok(Selected::First { index, card });
        };

        let outcome = self.evaluate(&table.deck, first, second);
        let pending = PendingResolution {
            token: tokens.allocate(),
            first,
            second,
            outcome,
            delay_ms: self.delay_for(outcome),
        };
        table.pending = Some(pending);

        Ok(Selected::Second { index, card, pending })
    }

    /// Fire the pending resolution if `token` is its live token.
    ///
    /// Returns `None`, changing nothing, for a stale or unknown token.
    pub fn resolve(&self, table: &mut Table, token: TimerToken) -> Option<Resolved> {
        let pending = table.pending.filter(|p| p.token == token)?;
        let PendingResolution { first, second, .. } = pending;
        let resolved = match pending.outcome {
            PairOutcome::Match => Resolved::Match {
                first,
                second,
                symbol: table.deck.get(first).map(|c| c.symbol())?,
            },
            PairOutcome::Mismatch => Resolved::Mismatch { first, second },
        };

        table.pending = None;
        table.selection.clear();
        if let Resolved::Match { .. } = resolved {
            table.deck.mark_matched(first);
            table.deck.mark_matched(second);
        }
        Some(resolved)
    }
}
