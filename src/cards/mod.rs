//! Cards, symbols, and decks.
//!
//! ## Key Types
//!
//! - `Symbol`: what a card shows; shared by exactly two cards
//! - `SymbolCatalog`: ordered symbol names decks are drawn from
//! - `Card`: id, symbol, matched flag
//! - `Deck`: the cards of one round
//! - `DeckBuilder`: deals a shuffled deck for a difficulty

pub mod card;
pub mod deck;
pub mod symbol;

pub use card::Card;
pub use deck::{Deck, DeckBuilder};
pub use symbol::{Symbol, SymbolCatalog};
