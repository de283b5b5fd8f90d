//! Session state: `AwaitingName -> Playing -> GameOver`.

use std::io;

use thiserror::Error;

use crate::core::Player;
use crate::types::GameOverReason;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("session is not waiting for a name")]
    NotAwaitingName,
    #[error("session has no player yet")]
    NoPlayer,
    #[error("Failed to initialize keyboard input: {source}")]
    DeviceInit {
        #[source]
        source: io::Error,
        /// Where the session stood when it had to be abandoned.
        summary: GameSummary,
    },
}

/// Where a game session is. Threaded through [`crate::RoundEngine::step`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    AwaitingName,
    Playing(Player),
    GameOver {
        player: Player,
        reason: GameOverReason,
    },
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the player's name and start playing.
    ///
    /// Surrounding whitespace is trimmed. On error the state is handed back
    /// unchanged alongside the reason.
    pub fn accept_name(self, name: &str) -> Result<Self, (Self, SessionError)> {
        match self {
            SessionState::AwaitingName => {
                let name = name.trim();
                if name.is_empty() {
                    return Err((SessionState::AwaitingName, SessionError::EmptyName));
                }
                log::info!("session started for {name}");
                Ok(SessionState::Playing(Player::new(name)))
            }
            other => Err((other, SessionError::NotAwaitingName)),
        }
    }

    pub fn player(&self) -> Option<&Player> {
        match self {
            SessionState::AwaitingName => None,
            SessionState::Playing(player) | SessionState::GameOver { player, .. } => Some(player),
        }
    }
}

/// Final report of a session, handed back to the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub name: String,
    pub score: u32,
    pub reason: GameOverReason,
    pub rounds: u32,
}

impl GameSummary {
    /// The line shown to the player when the session ends.
    pub fn final_message(&self) -> String {
        format!("Game over, {}! Final score: {}", self.name, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_name() {
        let state = SessionState::new().accept_name("  Ann \n").unwrap();
        assert_eq!(state, SessionState::Playing(Player::new("Ann")));
        assert_eq!(state.player().map(|p| p.score()), Some(0));
    }

    #[test]
    fn rejects_empty_name() {
        let (state, err) = SessionState::new().accept_name("   ").unwrap_err();
        assert_eq!(state, SessionState::AwaitingName);
        assert!(matches!(err, SessionError::EmptyName));
    }

    #[test]
    fn name_only_accepted_once() {
        let state = SessionState::new().accept_name("Ann").unwrap();
        let (state, err) = state.accept_name("Bo").unwrap_err();
        assert!(matches!(err, SessionError::NotAwaitingName));
        assert_eq!(state.player().map(|p| p.name.as_str()), Some("Ann"));
    }

    #[test]
    fn final_message_names_player_and_score() {
        let summary = GameSummary {
            name: "Bo".to_string(),
            score: 3,
            reason: GameOverReason::WrongSide,
            rounds: 4,
        };
        assert_eq!(summary.final_message(), "Game over, Bo! Final score: 3");
    }
}
