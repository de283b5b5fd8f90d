//! Player state for one session.

use crate::resolver::apply_delta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    pub fn with_score(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Apply a round delta. The score never drops below zero.
    pub fn apply(&mut self, delta: i32) -> u32 {
        self.score = apply_delta(self.score, delta);
        self.score
    }
}
