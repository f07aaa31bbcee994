//! Game rules that do not depend on round state.
//!
//! - `difficulty`: difficulty levels and their parameter table
//! - `scoring`: the final score of a completed round

pub mod difficulty;
pub mod scoring;

pub use difficulty::{Difficulty, DifficultyParams, DifficultyPolicy};
pub use scoring::{score, ScoreBreakdown};
