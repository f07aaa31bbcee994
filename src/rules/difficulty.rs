//! Difficulty levels and the parameter table they map to.
//!
//! Each difficulty fixes the structure of a round: how many pairs are dealt,
//! how wide the grid is, how long a mismatched pair stays visible, and how
//! many seconds the player gets.
//!
//! Easy carries a 999 second budget, which makes it effectively untimed.
//! Medium and hard use real budgets.

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigurationError, Result};

/// Difficulty level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lowercase name, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigurationError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self> {
        Difficulty::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownDifficulty(value.to_string()))
    }
}

/// Structural parameters of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Number of pairs dealt (deck size is twice this).
    pub pair_count: usize,

    /// Grid width used by the presentation layer.
    pub grid_columns: usize,

    /// How long a mismatched pair stays face-up, in milliseconds.
    pub mismatch_delay_ms: u64,

    /// Seconds on the clock when the round starts.
    pub time_budget_seconds: u32,
}

impl DifficultyParams {
    /// Number of cards in the deck.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Number of grid rows needed to lay out every card.
    #[must_use]
    pub fn grid_rows(&self) -> usize {
        if self.grid_columns == 0 {
            return 0;
        }
        self.card_count().div_ceil(self.grid_columns)
    }

    fn validate(&self, difficulty: Difficulty) -> Result<()> {
        let name = || difficulty.to_string();
        if self.pair_count == 0 {
            return Err(ConfigurationError::NoPairs { difficulty: name() });
        }
        if self.grid_columns == 0 {
            return Err(ConfigurationError::InvalidGrid { difficulty: name() });
        }
        if self.time_budget_seconds == 0 {
            return Err(ConfigurationError::InvalidTimeBudget { difficulty: name() });
        }
        if self.mismatch_delay_ms == 0 {
            return Err(ConfigurationError::InvalidDelay { name: "mismatch_delay_ms" });
        }
        Ok(())
    }
}

/// Maps each difficulty to its parameters.
///
/// A pure, total lookup. The table can be overridden through
/// `EngineConfig`, which validates it against the symbol catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyPolicy {
    pub easy: DifficultyParams,
    pub medium: DifficultyParams,
    pub hard: DifficultyParams,
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self {
            easy: DifficultyParams {
                pair_count: 6,
                grid_columns: 4,
                mismatch_delay_ms: 1000,
                time_budget_seconds: 999,
            },
            medium: DifficultyParams {
                pair_count: 8,
                grid_columns: 4,
                mismatch_delay_ms: 800,
                time_budget_seconds: 120,
            },
            hard: DifficultyParams {
                pair_count: 12,
                grid_columns: 6,
                mismatch_delay_ms: 600,
                time_budget_seconds: 90,
            },
        }
    }
}

impl DifficultyPolicy {
    /// Create the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a difficulty.
    #[must_use]
    pub fn parameters_for(&self, difficulty: Difficulty) -> DifficultyParams {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Parameters for a difficulty given by name.
    ///
    /// Fails with `UnknownDifficulty` for names outside the enumeration.
    pub fn parameters_for_name(&self, name: &str) -> Result<DifficultyParams> {
        let difficulty: Difficulty = name.parse()?;
        Ok(self.parameters_for(difficulty))
    }

    /// Replace the parameters of one difficulty (builder pattern).
    #[must_use]
    pub fn with_params(mut self, difficulty: Difficulty, params: DifficultyParams) -> Self {
        match difficulty {
            Difficulty::Easy => self.easy = params,
            Difficulty::Medium => self.medium = params,
            Difficulty::Hard => self.hard = params,
        }
        self
    }

    /// Largest pair count over all difficulties.
    #[must_use]
    pub fn max_pair_count(&self) -> usize {
        Difficulty::ALL
            .iter()
            .map(|&d| self.parameters_for(d).pair_count)
            .max()
            .unwrap_or(0)
    }

    /// Check every entry, and that the catalog can supply every pair count.
    pub fn validate(&self, catalog_size: usize) -> Result<()> {
        for difficulty in Difficulty::ALL {
            self.parameters_for(difficulty).validate(difficulty)?;
        }
        let pair_count = self.max_pair_count();
        if pair_count > catalog_size {
            return Err(ConfigurationError::CatalogTooSmall { pair_count, catalog_size });
        }
        Ok(())
    }
}
