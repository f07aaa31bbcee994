//! Final score of a completed round.
//!
//! `score = max(1000 + 10 * seconds_remaining - 5 * move_count, 0)`
//!
//! Only completed rounds are scored. An expired round has no final score.

use serde::{Deserialize, Serialize};

/// Points every completed round starts with.
pub const BASE_SCORE: i64 = 1000;

/// Points per second left on the clock.
pub const TIME_BONUS_PER_SECOND: i64 = 10;

/// Points lost per move.
pub const MOVE_PENALTY: i64 = 5;

/// Compute the final score.
///
/// ```
/// use memory_match::rules::score;
///
/// assert_eq!(score(10, 5), 1075);
/// assert_eq!(score(0, 250), 0);
/// ```
#[must_use]
pub fn score(seconds_remaining: u32, move_count: u32) -> u32 {
    ScoreBreakdown::new(seconds_remaining, move_count).total
}

/// Score split into its terms, for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub time_bonus: u32,
    pub move_penalty: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn new(seconds_remaining: u32, move_count: u32) -> Self {
        let time_bonus = TIME_BONUS_PER_SECOND * i64::from(seconds_remaining);
        let move_penalty = MOVE_PENALTY * i64::from(move_count);
        let total = (BASE_SCORE + time_bonus - move_penalty).max(0);

        Self {
            base: clamp_u32(BASE_SCORE),
            time_bonus: clamp_u32(time_bonus),
            move_penalty: clamp_u32(move_penalty),
            total: clamp_u32(total),
        }
    }
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_examples() {
        assert_eq!(score(10, 5), 1075);
        assert_eq!(score(0, 250), 0);
        assert_eq!(score(50, 6), 1470);
    }

    #[test]
    fn test_score_floors_at_zero() {
        assert_eq!(score(0, 200), 0);
        assert_eq!(score(0, 201), 0);
        assert_eq!(score(0, u32::MAX), 0);
    }

    #[test]
    fn test_score_is_idempotent() {
        assert_eq!(score(37, 14), score(37, 14));
    }

    #[test]
    fn test_breakdown_terms() {
        let breakdown = ScoreBreakdown::new(10, 5);
        assert_eq!(breakdown.base, 1000);
        assert_eq!(breakdown.time_bonus, 100);
        assert_eq!(breakdown.move_penalty, 25);
        assert_eq!(breakdown.total, 1075);
    }

    #[test]
    fn test_large_inputs_do_not_overflow() {
        assert_eq!(score(u32::MAX, 0), u32::MAX);
    }
}
