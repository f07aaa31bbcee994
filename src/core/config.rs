//! Engine configuration.
//!
//! Hosts configure the engine at startup by providing:
//! - `SymbolCatalog`: the symbols decks are drawn from
//! - `DifficultyPolicy`: the per-difficulty parameter table
//! - timing constants (match reveal delay, clock tick interval)
//! - an optional RNG seed for reproducible decks
//!
//! Every field has a default, so a JSON config only needs to name what it
//! overrides. `validate` rejects tables the catalog cannot supply; once a
//! controller has been built from a validated config, no configuration
//! error can surface during play.

use serde::{Deserialize, Serialize};

use super::error::{ConfigurationError, Result};
use crate::cards::SymbolCatalog;
use crate::rules::{Difficulty, DifficultyParams, DifficultyPolicy};

/// Default delay before a matched pair is marked matched.
pub const DEFAULT_MATCH_REVEAL_DELAY_MS: u64 = 500;

/// Default clock tick interval: one whole second.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use memory_match::core::EngineConfig;
/// use memory_match::rules::Difficulty;
///
/// let config = EngineConfig::from_json(r#"{ "initial_difficulty": "hard", "seed": 7 }"#).unwrap();
/// assert_eq!(config.initial_difficulty, Difficulty::Hard);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.match_reveal_delay_ms, 500);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Symbols decks are drawn from, in order.
    pub catalog: SymbolCatalog,

    /// Parameter table per difficulty.
    pub difficulties: DifficultyPolicy,

    /// Difficulty of the first round.
    pub initial_difficulty: Difficulty,

    /// How long a matched pair stays face-up before it is marked matched.
    pub match_reveal_delay_ms: u64,

    /// Virtual milliseconds per clock tick.
    pub tick_interval_ms: u64,

    /// Seed for deck shuffling. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog: SymbolCatalog::default(),
            difficulties: DifficultyPolicy::default(),
            initial_difficulty: Difficulty::default(),
            match_reveal_delay_ms: DEFAULT_MATCH_REVEAL_DELAY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the symbol catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: SymbolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Override the parameters of one difficulty.
    #[must_use]
    pub fn with_difficulty_params(mut self, difficulty: Difficulty, params: DifficultyParams) -> Self {
        self.difficulties = self.difficulties.with_params(difficulty, params);
        self
    }

    /// Set the difficulty of the first round.
    #[must_use]
    pub fn with_initial_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.initial_difficulty = difficulty;
        self
    }

    /// Set the match reveal delay.
    #[must_use]
    pub fn with_match_reveal_delay_ms(mut self, delay_ms: u64) -> Self {
        self.match_reveal_delay_ms = delay_ms;
        self
    }

    /// Set the clock tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, interval_ms: u64) -> Self {
        self.tick_interval_ms = interval_ms;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parameters for a difficulty under this configuration.
    #[must_use]
    pub fn parameters_for(&self, difficulty: Difficulty) -> DifficultyParams {
        self.difficulties.parameters_for(difficulty)
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.difficulties.validate(self.catalog.len())?;
        if self.match_reveal_delay_ms == 0 {
            return Err(ConfigurationError::InvalidDelay { name: "match_reveal_delay_ms" });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigurationError::InvalidDelay { name: "tick_interval_ms" });
        }
        Ok(())
    }
}
