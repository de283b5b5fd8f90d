//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`KeySignal`]s and provides the
//! bounded-time [`ChoiceListener`]: one listener thread per round, raced
//! against the round's deadline, with best-effort cancellation.

pub mod listener;
pub mod map;
pub mod source;

pub use endless_stairs_types as types;

pub use listener::{AcquireError, ChoiceListener, ChoiceSource, COUNTDOWN_TICK_MS, LISTENER_POLL_MS};
pub use map::{handle_key_event, should_quit, KeySignal};
pub use source::{CrosstermKeySource, KeySource, ScriptedKey, ScriptedKeySource};
