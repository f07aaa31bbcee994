//! Configuration errors.
//!
//! The engine has no recoverable runtime errors during normal play. The only
//! failure mode is a bad configuration: an unknown difficulty, a parameter
//! table that asks for more pairs than the symbol catalog can supply, and so
//! on. These are rejected when an `EngineConfig` is validated, before any
//! round exists.
//!
//! Rejected selections are not errors; see `round::IgnoreReason`.

use thiserror::Error;

/// Invalid or unsupported engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("pair count {pair_count} exceeds symbol catalog size {catalog_size}")]
    CatalogTooSmall { pair_count: usize, catalog_size: usize },

    #[error("difficulty {difficulty} has no pairs")]
    NoPairs { difficulty: String },

    #[error("difficulty {difficulty} has zero grid columns")]
    InvalidGrid { difficulty: String },

    #[error("difficulty {difficulty} has a zero time budget")]
    InvalidTimeBudget { difficulty: String },

    #[error("symbol {symbol:?} appears more than once in the catalog")]
    DuplicateSymbol { symbol: String },

    #[error("{name} must be positive")]
    InvalidDelay { name: &'static str },

    #[error("invalid engine config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Parse(err.to_string())
    }
}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigurationError::CatalogTooSmall { pair_count: 20, catalog_size: 16 };
        assert_eq!(err.to_string(), "pair count 20 exceeds symbol catalog size 16");

        let err = ConfigurationError::UnknownDifficulty("expert".into());
        assert_eq!(err.to_string(), "unknown difficulty: expert");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: ConfigurationError = json_err.into();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }
}
