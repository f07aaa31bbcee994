//! A single card on the table.
//!
//! The symbol is fixed for the card's lifetime. The matched flag goes from
//! `false` to `true` exactly once; face-up state is not stored here, it is
//! derived from the round's selection.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::entity::CardId;

/// A card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    matched: bool,
}

impl Card {
    /// Create an unmatched card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            matched: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Check if two cards form a pair (same symbol, different cards).
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }

    /// Mark the card as matched.
    ///
    /// Returns `false` and changes nothing if it was already matched.
    pub fn mark_matched(&mut self) -> bool {
        if self.matched {
            return false;
        }
        self.matched = true;
        true
    }
}
