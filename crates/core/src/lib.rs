//! Core game logic module - pure round rules
//!
//! This module contains the game rules that decide each round. It has no
//! dependencies on the terminal, the keyboard or the leaderboard file, making it:
//!
//! - **Testable**: every rule is a plain function or a small struct
//! - **Portable**: runs headless, in tests, or behind any front end
//!
//! # Module Structure
//!
//! - [`generator`]: random stair (side + type) per round
//! - [`policy`]: time budget from score and stair type, [`RoundContext`]
//! - [`resolver`]: outcome of a jump, score clamping
//! - [`player`]: name and score for one session
//!
//! # Example
//!
//! ```
//! use endless_stairs_core::{resolve, RoundContext};
//! use endless_stairs_types::{Obstacle, ObstacleType, RoundOutcome, Side};
//!
//! let ctx = RoundContext::new(Obstacle::new(Side::Left, ObstacleType::Reverse), 0);
//! assert!(ctx.polarity_inverted);
//!
//! // On a reverse stair the player presses the opposite key.
//! let outcome = resolve(ctx.obstacle, Side::Right, ctx.polarity_inverted, 0);
//! assert_eq!(outcome, RoundOutcome::Advance(1));
//! ```

pub mod generator;
pub mod player;
pub mod policy;
pub mod resolver;

pub use endless_stairs_types as types;

pub use generator::{ObstacleGenerator, ObstacleSource, ScriptedObstacles};
pub use player::Player;
pub use policy::{apply_type_modifier, base_budget, RoundContext};
pub use resolver::{apply_delta, resolve};
