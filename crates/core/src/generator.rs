//! Obstacle generation
//!
//! Each round draws one stair: the side is a fair coin flip, the type is a
//! single roll in `[0, 100)` mapped through [`ObstacleType::from_roll`].
//!
//! Gameplay uses the thread RNG. Tests and benches can pass any seeded
//! [`rand::Rng`] instead.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::types::{Obstacle, ObstacleType, Side, TYPE_ROLL_RANGE};

/// Anything that can hand the engine the next stair.
pub trait ObstacleSource {
    fn next_obstacle(&mut self) -> Obstacle;
}

/// Random stair generator
#[derive(Debug, Clone)]
pub struct ObstacleGenerator<R = ThreadRng> {
    rng: R,
}

impl ObstacleGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local RNG
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ObstacleGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ObstacleGenerator<R> {
    /// Create a generator with an explicit RNG
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the next stair
    pub fn generate(&mut self) -> Obstacle {
        let side = if self.rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        let kind = ObstacleType::from_roll(self.rng.gen_range(0..TYPE_ROLL_RANGE));
        Obstacle::new(side, kind)
    }
}

impl<R: Rng> ObstacleSource for ObstacleGenerator<R> {
    fn next_obstacle(&mut self) -> Obstacle {
        self.generate()
    }
}

/// Replays a fixed list of stairs, then repeats the last one.
///
/// Useful for scripted sessions.
#[derive(Debug, Clone)]
pub struct ScriptedObstacles {
    script: Vec<Obstacle>,
    next: usize,
}

impl ScriptedObstacles {
    pub fn new(script: Vec<Obstacle>) -> Self {
        Self { script, next: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.next)
    }
}

impl ObstacleSource for ScriptedObstacles {
    fn next_obstacle(&mut self) -> Obstacle {
        let idx = self.next.min(self.script.len().saturating_sub(1));
        self.next += 1;
        self.script
            .get(idx)
            .copied()
            .unwrap_or(Obstacle::new(Side::Left, ObstacleType::Normal))
    }
}
