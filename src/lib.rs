//! Endless Stairs (workspace facade crate).
//!
//! Re-exports the game crates under `endless_stairs::{core,engine,input,leaderboard,term,types}`
//! and hosts the application glue used by the binary: configuration, the start
//! menu, and the terminal display the round engine draws through.

pub use endless_stairs_core as core;
pub use endless_stairs_engine as engine;
pub use endless_stairs_input as input;
pub use endless_stairs_leaderboard as leaderboard;
pub use endless_stairs_term as term;
pub use endless_stairs_types as types;

pub mod config;
pub mod display;
pub mod menu;
