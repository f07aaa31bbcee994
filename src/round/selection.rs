//! The face-up, unmatched cards of the current turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Most cards that can be face-up at once.
pub const MAX_FACE_UP: usize = 2;

/// Deck positions currently face-up.
///
/// Holds at most two positions, in the order they were revealed. Cleared
/// as a whole after each resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    positions: SmallVec<[usize; MAX_FACE_UP]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if no further card may be turned.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.positions.len() >= MAX_FACE_UP
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.positions.contains(&index)
    }

    /// Add a position.
    ///
    /// Returns `false` and changes nothing if the selection is full or
    /// already holds the position.
    pub fn push(&mut self, index: usize) -> bool {
        if self.is_full() || self.contains(index) {
            return false;
        }
        self.positions.push(index);
        true
    }

    /// Both positions, once two cards are face-up.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.positions.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut selection = Selection::new();
        assert!(selection.push(3));
        assert_eq!(selection.pair(), None);
        assert!(selection.push(7));
        assert!(selection.is_full());
        assert_eq!(selection.pair(), Some((3, 7)));

        assert!(!selection.push(9));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_push_duplicate() {
        let mut selection = Selection::new();
        assert!(selection.push(1));
        assert!(!selection.push(1));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.push(0);
        selection.push(1);
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.iter().count(), 0);
    }
}
