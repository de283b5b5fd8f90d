//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (round logic, input mapping, terminal rendering).
//!
//! # Time Budget Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_BUDGET_MS` | 5000 | Time to choose at score 0 |
//! | `BUDGET_STEP_MS` | 500 | Budget lost per point of score |
//! | `BUDGET_FLOOR_MS` | 1000 | Minimum budget for any round |
//! | `FALLING_BUDGET_FLOOR_MS` | 900 | Minimum budget after the falling-stair halving |
//! | `GOOD_JUMP_PAUSE_MS` | 200 | Feedback pause after a clean jump |
//! | `HAZARD_PAUSE_MS` | 400 | Feedback pause after a falling or spiked stair |
//!
//! # Obstacle Distribution
//!
//! One roll in `[0, 100)` picks the obstacle type:
//!
//! | Roll | Type |
//! |------|------|
//! | 0..50 | Normal |
//! | 50..60 | Falling |
//! | 60..70 | Spiked |
//! | 70..90 | Reverse |
//! | 90..100 | Super |
//!
//! # Examples
//!
//! ```
//! use endless_stairs_types::{ObstacleType, Side};
//!
//! assert_eq!("L".parse::<Side>(), Ok(Side::Left));
//! assert_eq!(Side::Left.flipped(), Side::Right);
//!
//! assert_eq!(ObstacleType::from_roll(0), ObstacleType::Normal);
//! assert_eq!(ObstacleType::from_roll(95), ObstacleType::Super);
//! assert!(ObstacleType::Reverse.inverts_polarity());
//! ```

use std::fmt;
use std::str::FromStr;

/// Time budget at score 0 (5 seconds).
pub const BASE_BUDGET_MS: u64 = 5000;

/// Budget reduction per point of score (half a second).
pub const BUDGET_STEP_MS: u64 = 500;

/// Budget floor for every round (1 second).
pub const BUDGET_FLOOR_MS: u64 = 1000;

/// Budget floor once a falling stair has halved the base budget.
pub const FALLING_BUDGET_FLOOR_MS: u64 = 900;

/// Pause after a normal, reverse or super jump.
pub const GOOD_JUMP_PAUSE_MS: u64 = 200;

/// Pause after a falling or spiked stair so the player can read the feedback.
pub const HAZARD_PAUSE_MS: u64 = 400;

/// Exclusive upper bound of the obstacle type roll.
pub const TYPE_ROLL_RANGE: u32 = 100;

/// Upper (exclusive) roll bounds, cumulative, in [`ObstacleType::ALL`] order.
pub const TYPE_ROLL_BOUNDS: [u32; 5] = [50, 60, 70, 90, 100];

/// Score awarded for a super stair.
pub const SUPER_BONUS: i32 = 5;

/// Number of leaderboard entries kept by default.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Which side of the staircase a stair (or a jump) is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// The opposite side.
    pub fn flipped(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError(String);

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a side: {:?}", self.0)
    }
}

impl std::error::Error for ParseSideError {}

/// Case-insensitive, long or one-letter form.
impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Behavioral type of a stair.
///
/// - **Normal**: plain stair, +1
/// - **Falling**: collapses under the player; half the time to react, no points
/// - **Spiked**: hurts; -1 (never below zero)
/// - **Reverse**: swaps the meaning of left and right for this round, +1
/// - **Super**: bonus stair, +5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleType {
    Normal,
    Falling,
    Spiked,
    Reverse,
    Super,
}

impl ObstacleType {
    pub const ALL: [ObstacleType; 5] = [
        ObstacleType::Normal,
        ObstacleType::Falling,
        ObstacleType::Spiked,
        ObstacleType::Reverse,
        ObstacleType::Super,
    ];

    /// Map a roll in `[0, 100)` onto the fixed type distribution.
    ///
    /// Rolls outside the range are reduced modulo 100 first.
    pub fn from_roll(roll: u32) -> Self {
        let roll = roll % TYPE_ROLL_RANGE;
        for (kind, bound) in Self::ALL.iter().zip(TYPE_ROLL_BOUNDS) {
            if roll < bound {
                return *kind;
            }
        }
        ObstacleType::Super
    }

    /// Share of the roll range (out of 100) this type occupies.
    pub fn weight(self) -> u32 {
        let idx = self as usize;
        let lower = if idx == 0 { 0 } else { TYPE_ROLL_BOUNDS[idx - 1] };
        TYPE_ROLL_BOUNDS[idx] - lower
    }

    pub fn inverts_polarity(self) -> bool {
        matches!(self, ObstacleType::Reverse)
    }

    /// Display pause after surviving a stair of this type.
    pub fn feedback_pause_ms(self) -> u64 {
        match self {
            ObstacleType::Falling | ObstacleType::Spiked => HAZARD_PAUSE_MS,
            ObstacleType::Normal | ObstacleType::Reverse | ObstacleType::Super => {
                GOOD_JUMP_PAUSE_MS
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleType::Normal => "normal",
            ObstacleType::Falling => "falling",
            ObstacleType::Spiked => "spiked",
            ObstacleType::Reverse => "reverse",
            ObstacleType::Super => "super",
        }
    }
}

/// The stair the player must react to this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub side: Side,
    pub kind: ObstacleType,
}

impl Obstacle {
    pub const fn new(side: Side, kind: ObstacleType) -> Self {
        Self { side, kind }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The player jumped to the side without a stair.
    WrongSide,
    /// The countdown ran out before a choice was made.
    Timeout,
    /// The player pressed Ctrl-C mid-round.
    Quit,
    /// The key source failed mid-session.
    InputLost,
}

/// Result of resolving one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The player survives; the delta is already clamped so the score stays >= 0.
    Advance(i32),
    GameOver(GameOverReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_bounds_cover_the_whole_range() {
        assert_eq!(TYPE_ROLL_BOUNDS[TYPE_ROLL_BOUNDS.len() - 1], TYPE_ROLL_RANGE);
        assert!(TYPE_ROLL_BOUNDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn roll_weights_match_distribution() {
        let weights: Vec<u32> = ObstacleType::ALL.iter().map(|t| t.weight()).collect();
        assert_eq!(weights, vec![50, 10, 10, 20, 10]);
    }

    #[test]
    fn roll_partition_boundaries() {
        assert_eq!(ObstacleType::from_roll(0), ObstacleType::Normal);
        assert_eq!(ObstacleType::from_roll(49), ObstacleType::Normal);
        assert_eq!(ObstacleType::from_roll(50), ObstacleType::Falling);
        assert_eq!(ObstacleType::from_roll(59), ObstacleType::Falling);
        assert_eq!(ObstacleType::from_roll(60), ObstacleType::Spiked);
        assert_eq!(ObstacleType::from_roll(69), ObstacleType::Spiked);
        assert_eq!(ObstacleType::from_roll(70), ObstacleType::Reverse);
        assert_eq!(ObstacleType::from_roll(89), ObstacleType::Reverse);
        assert_eq!(ObstacleType::from_roll(90), ObstacleType::Super);
        assert_eq!(ObstacleType::from_roll(99), ObstacleType::Super);
    }

    #[test]
    fn out_of_range_roll_wraps_into_range() {
        assert_eq!(ObstacleType::from_roll(100), ObstacleType::Normal);
        assert_eq!(ObstacleType::from_roll(175), ObstacleType::Reverse);
    }

    #[test]
    fn only_reverse_inverts_polarity() {
        for kind in ObstacleType::ALL {
            assert_eq!(kind.inverts_polarity(), kind == ObstacleType::Reverse);
        }
    }

    #[test]
    fn side_parsing_accepts_long_and_short_names() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert_eq!("RIGHT".parse::<Side>(), Ok(Side::Right));
        assert_eq!("r".parse::<Side>(), Ok(Side::Right));
        assert!("up".parse::<Side>().is_err());
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn feedback_pause_by_type() {
        assert_eq!(ObstacleType::Normal.feedback_pause_ms(), GOOD_JUMP_PAUSE_MS);
        assert_eq!(ObstacleType::Reverse.feedback_pause_ms(), GOOD_JUMP_PAUSE_MS);
        assert_eq!(ObstacleType::Super.feedback_pause_ms(), GOOD_JUMP_PAUSE_MS);
        assert_eq!(ObstacleType::Falling.feedback_pause_ms(), HAZARD_PAUSE_MS);
        assert_eq!(ObstacleType::Spiked.feedback_pause_ms(), HAZARD_PAUSE_MS);
    }
}
