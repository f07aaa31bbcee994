//! # memory-match
//!
//! Engine for a timed card-matching (memory) game. A player reveals two
//! hidden cards per turn; matched pairs stay face-up, and the round ends
//! when every pair is matched or the clock runs out.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every stimulus is a `Command` applied to an
//!    immutable `GameState`, producing a new state, events, and timer
//!    requests. Rendering is left entirely to the host.
//!
//! 2. **Virtual Time**: Delays and clock ticks live in a `Scheduler` that
//!    only moves when the host calls `advance`, so rounds are reproducible.
//!
//! 3. **Explicit Cancellation**: Every scheduled callback carries a
//!    `TimerToken`; resets cancel outstanding timers and the reducer rejects
//!    tokens from superseded rounds.
//!
//! ## Modules
//!
//! - `core`: identifiers, configuration, errors, RNG
//! - `cards`: symbols, cards, decks, deck building
//! - `rules`: difficulty table and scoring
//! - `round`: selection, turn resolution, round clock
//! - `game`: state, reducer, scheduler, controller, events, snapshots

pub mod cards;
pub mod core;
pub mod game;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{CardId, ConfigurationError, EngineConfig, GameRng, RoundId, TimerToken};

pub use crate::cards::{Card, Deck, DeckBuilder, Symbol, SymbolCatalog};

pub use crate::rules::{score, Difficulty, DifficultyParams, DifficultyPolicy, ScoreBreakdown};

pub use crate::round::{EndCause, IgnoreReason, RoundClock, RoundStatus, Selection, TurnResolver};

pub use crate::game::{Command, GameController, GameEvent, GameState, Snapshot, Transition};
