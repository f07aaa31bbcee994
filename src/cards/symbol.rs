//! Card symbols and the catalog they are drawn from.
//!
//! A `Symbol` is an index into a `SymbolCatalog`. Decks take the first
//! `pair_count` symbols of the catalog, so the catalog must be at least as
//! long as the largest pair count of any difficulty.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigurationError, Result};

/// The kind a card shows when face-up. Exactly two cards in a deck share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Position of this symbol in its catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

const DEFAULT_SYMBOLS: [&str; 16] = [
    "apple",
    "banana",
    "cherry",
    "grape",
    "lemon",
    "orange",
    "pear",
    "pineapple",
    "strawberry",
    "watermelon",
    "kiwi",
    "mango",
    "peach",
    "plum",
    "coconut",
    "avocado",
];

/// Ordered list of symbol names.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Symbol, SymbolCatalog};
///
/// let catalog = SymbolCatalog::new(["sun", "moon", "star"]);
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.name(Symbol::new(1)), Some("moon"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolCatalog {
    names: Vec<String>,
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

impl SymbolCatalog {
    /// Create a catalog from names, in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of symbols in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a symbol, if it belongs to this catalog.
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.names.get(symbol.index()).map(String::as_str)
    }

    /// The first `count` symbols.
    ///
    /// Fails with `CatalogTooSmall` when the catalog is shorter than `count`.
    pub fn first(&self, count: usize) -> Result<impl Iterator<Item = Symbol>> {
        if count > self.len() || count > usize::from(u16::MAX) {
            return Err(ConfigurationError::CatalogTooSmall {
                pair_count: count,
                catalog_size: self.len(),
            });
        }
        Ok((0..count).map(|i| Symbol::new(i as u16)))
    }

    /// Reject duplicate names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for name in &self.names {
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::DuplicateSymbol { symbol: name.clone() });
            }
        }
        Ok(())
    }
}
