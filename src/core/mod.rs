//! Core engine types: identifiers, errors, RNG, configuration.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_MATCH_REVEAL_DELAY_MS, DEFAULT_TICK_INTERVAL_MS};
pub use entity::{CardId, RoundId, TimerToken, TokenCounter};
pub use error::{ConfigurationError, Result};
pub use rng::GameRng;
