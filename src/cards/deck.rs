//! Decks and the builder that deals them.
//!
//! A deck holds `2 * pair_count` cards; every symbol appears exactly twice.
//! Cards are stored in an `im::Vector` so cloning a deck for a new state
//! snapshot is O(1).

use im::Vector;
use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::symbol::{Symbol, SymbolCatalog};
use crate::core::entity::CardId;
use crate::core::error::{ConfigurationError, Result};
use crate::core::rng::GameRng;
use crate::rules::{Difficulty, DifficultyParams, DifficultyPolicy};

/// Ordered cards of one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck from cards in the given order.
    ///
    /// No pairing check is made; see `is_well_formed`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards already matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Check if every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }

    /// Mark the card at `index` as matched.
    ///
    /// Returns `false` if the index is out of range or the card was already
    /// matched.
    pub fn mark_matched(&mut self, index: usize) -> bool {
        self.cards
            .get_mut(index)
            .map(Card::mark_matched)
            .unwrap_or(false)
    }

    /// Position of the other card sharing the symbol at `index`.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let card = self.cards.get(index)?;
        self.cards
            .iter()
            .enumerate()
            .find(|(i, other)| *i != index && other.symbol() == card.symbol())
            .map(|(i, _)| i)
    }

    /// Check the pairing invariant: every symbol appears exactly twice and
    /// card ids are unique.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut symbols: FxHashMap<Symbol, usize> = FxHashMap::default();
        let mut ids: FxHashSet<CardId> = FxHashSet::default();

        for card in &self.cards {
            *symbols.entry(card.symbol()).or_insert(0) += 1;
            if !ids.insert(card.id()) {
                return false;
            }
        }

        symbols.values().all(|&count| count == 2)
    }
}

/// Deals shuffled decks from a catalog and a difficulty policy.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{DeckBuilder, SymbolCatalog};
/// use memory_match::core::GameRng;
/// use memory_match::rules::{Difficulty, DifficultyPolicy};
///
/// let catalog = SymbolCatalog::default();
/// let policy = DifficultyPolicy::default();
/// let mut rng = GameRng::new(42);
///
/// let deck = DeckBuilder::new(&catalog, &policy)
///     .build(Difficulty::Easy, &mut rng)
///     .unwrap();
///
/// assert_eq!(deck.len(), 12);
/// assert!(deck.is_well_formed());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder<'a> {
    catalog: &'a SymbolCatalog,
    policy: &'a DifficultyPolicy,
}

impl<'a> DeckBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a SymbolCatalog, policy: &'a DifficultyPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Deal a shuffled deck for a difficulty.
    pub fn build(&self, difficulty: Difficulty, rng: &mut GameRng) -> Result<Deck> {
        let params = self.policy.parameters_for(difficulty);
        if params.pair_count == 0 {
            return Err(ConfigurationError::NoPairs {
                difficulty: difficulty.to_string(),
            });
        }
        self.build_with_params(&params, rng)
    }

    /// Deal a shuffled deck for already-resolved parameters.
    pub fn build_with_params(&self, params: &DifficultyParams, rng: &mut GameRng) -> Result<Deck> {
        let mut cards = Vec::with_capacity(params.card_count());
        let mut next_id = 0u32;

        for symbol in self.catalog.first(params.pair_count)? {
            for _ in 0..2 {
                cards.push(Card::new(CardId::new(next_id), symbol));
                next_id += 1;
            }
        }

        rng.shuffle(&mut cards);
        trace!("dealt {} cards ({} pairs)", cards.len(), params.pair_count);

        Ok(Deck::from_cards(cards))
    }
}
