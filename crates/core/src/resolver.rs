//! Round resolution
//!
//! Pure function from (stair, choice, polarity, score) to [`RoundOutcome`].
//! A choice on the wrong side always ends the game; type bonuses only apply
//! to a matching jump.

use crate::types::{GameOverReason, Obstacle, ObstacleType, RoundOutcome, Side, SUPER_BONUS};

/// Resolve the player's choice against the live stair.
///
/// When `polarity_inverted` is set the chosen side is swapped before the
/// comparison. A spiked stair never takes the score below zero: at score 0 the
/// delta is 0.
pub fn resolve(
    obstacle: Obstacle,
    chosen_side: Side,
    polarity_inverted: bool,
    current_score: u32,
) -> RoundOutcome {
    let corrected = if polarity_inverted {
        chosen_side.flipped()
    } else {
        chosen_side
    };

    if corrected != obstacle.side {
        return RoundOutcome::GameOver(GameOverReason::WrongSide);
    }

    let delta = match obstacle.kind {
        ObstacleType::Normal | ObstacleType::Reverse => 1,
        ObstacleType::Falling => 0,
        ObstacleType::Spiked => {
            if current_score == 0 {
                0
            } else {
                -1
            }
        }
        ObstacleType::Super => SUPER_BONUS,
    };
    RoundOutcome::Advance(delta)
}

/// Apply a score delta, clamping at zero.
pub fn apply_delta(score: u32, delta: i32) -> u32 {
    score.saturating_add_signed(delta)
}
