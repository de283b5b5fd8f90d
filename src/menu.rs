//! Start menu text and parsing.

use crate::engine::{GameSummary, SessionError};
use crate::leaderboard::LeaderboardEntry;

pub const MENU_LINES: [&str; 4] = [
    "==== Endless Stairs ====",
    "1. Start Game",
    "2. View Leaderboard",
    "3. Quit",
];

pub const MENU_PROMPT: &str = "Select an option (1-3): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartGame,
    ViewLeaderboard,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::StartGame),
            "2" => Some(MenuChoice::ViewLeaderboard),
            "3" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Leaderboard screen body.
pub fn leaderboard_lines(entries: &[LeaderboardEntry]) -> Vec<String> {
    let mut lines = vec!["==== Leaderboard ====".to_string()];
    if entries.is_empty() {
        lines.push("No scores yet.".to_string());
        return lines;
    }
    lines.extend(
        entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {} - {}", i + 1, e.name, e.score)),
    );
    lines
}

/// What to print once a game session ends. Every ending names the player
/// and the final score, including a keyboard that never came up.
pub fn session_end_lines(result: &Result<GameSummary, SessionError>) -> Vec<String> {
    match result {
        Ok(summary) => vec![summary.final_message()],
        Err(err) => {
            let mut lines = vec![err.to_string()];
            if let SessionError::DeviceInit { summary, .. } = err {
                lines.push(summary.final_message());
            }
            lines
        }
    }
}
