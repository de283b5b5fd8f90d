//! Difficulty policy - how much time the player gets each round
//!
//! The base budget shrinks by half a second per point, floored at one second.
//! Falling stairs halve it again, floored at 0.9 seconds.

use std::time::Duration;

use crate::types::{
    Obstacle, ObstacleType, BASE_BUDGET_MS, BUDGET_FLOOR_MS, BUDGET_STEP_MS,
    FALLING_BUDGET_FLOOR_MS,
};

/// Base time budget for a round started at `score`.
pub fn base_budget(score: u32) -> Duration {
    let reduction = BUDGET_STEP_MS.saturating_mul(score as u64);
    let ms = BASE_BUDGET_MS
        .saturating_sub(reduction)
        .max(BUDGET_FLOOR_MS);
    Duration::from_millis(ms)
}

/// Adjust a base budget for the obstacle type.
pub fn apply_type_modifier(base: Duration, kind: ObstacleType) -> Duration {
    match kind {
        ObstacleType::Falling => (base / 2).max(Duration::from_millis(FALLING_BUDGET_FLOOR_MS)),
        ObstacleType::Normal | ObstacleType::Spiked | ObstacleType::Reverse | ObstacleType::Super => {
            base
        }
    }
}

/// Everything the engine needs to run one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundContext {
    pub obstacle: Obstacle,
    pub effective_time_budget: Duration,
    pub polarity_inverted: bool,
}

impl RoundContext {
    /// Derive the round context from the stair and the score at round start.
    pub fn new(obstacle: Obstacle, score: u32) -> Self {
        Self {
            obstacle,
            effective_time_budget: apply_type_modifier(base_budget(score), obstacle.kind),
            polarity_inverted: obstacle.kind.inverts_polarity(),
        }
    }
}
