//! Read-only view of a game, rebuilt after every transition.

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::entity::{CardId, RoundId};
use crate::round::RoundStatus;
use crate::rules::Difficulty;

/// One card as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub symbol: Symbol,
    /// Catalog name of the symbol.
    pub name: Option<String>,
    pub matched: bool,
    /// Revealed in the current turn and not yet matched.
    pub face_up: bool,
}

/// Everything the presentation layer needs to draw a frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: RoundId,
    pub difficulty: Difficulty,
    pub status: RoundStatus,
    pub cards: Vec<CardView>,
    pub grid_columns: usize,
    pub grid_rows: usize,
    pub seconds_remaining: u32,
    pub move_count: u32,
    pub match_count: u32,
    pub pair_count: usize,
    /// A revealed pair is being displayed; clicks are ignored.
    pub checking: bool,
    /// Set only when the round was completed.
    pub final_score: Option<u32>,
}
