//! Key mapping from terminal events to jump signals.

use crate::types::Side;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a single key press means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySignal {
    Jump(Side),
    Quit,
    /// Any other key; the listener keeps waiting.
    Unrecognized,
}

/// Map keyboard input to a jump signal.
pub fn handle_key_event(key: KeyEvent) -> KeySignal {
    if key.kind == KeyEventKind::Release {
        return KeySignal::Unrecognized;
    }
    if should_quit(key) {
        return KeySignal::Quit;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('l') | KeyCode::Char('L') => KeySignal::Jump(Side::Left),
        KeyCode::Right | KeyCode::Char('r') | KeyCode::Char('R') => KeySignal::Jump(Side::Right),
        _ => KeySignal::Unrecognized,
    }
}

/// Ctrl-C quits; raw mode keeps it from reaching the process as SIGINT.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
