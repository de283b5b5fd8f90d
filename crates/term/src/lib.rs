//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a framebuffer
//! that the renderer flushes to the terminal with diff encoding.
//!
//! - [`stairs`]: stair art and type badges
//! - [`game_view`]: HUD layout (pure, testable)
//! - [`renderer`]: crossterm backend

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod stairs;

pub use endless_stairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_seconds, stair_frame, GameView, HudView, Viewport, FRAME_HEIGHT, TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use stairs::{stair_art, type_badge};
