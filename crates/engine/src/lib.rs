//! Round engine - the per-round and per-session control flow
//!
//! Composes the pure rules from `endless-stairs-core` with the bounded-time
//! input protocol from `endless-stairs-input`:
//!
//! - [`SessionState`]: `AwaitingName -> Playing -> GameOver`, threaded by value
//! - [`RoundEngine`]: plays rounds and drives the session to game over
//! - [`Renderer`]: display sink the engine talks to
//! - [`script`]: scripted input and a recording renderer for headless runs
//!
//! # Example
//!
//! ```
//! use endless_stairs_core::ScriptedObstacles;
//! use endless_stairs_engine::script::{RecordingRenderer, ScriptedChoices};
//! use endless_stairs_engine::{RoundEngine, SessionState};
//! use endless_stairs_types::{GameOverReason, Obstacle, ObstacleType, Side};
//!
//! let stairs = ScriptedObstacles::new(vec![
//!     Obstacle::new(Side::Left, ObstacleType::Normal),
//!     Obstacle::new(Side::Right, ObstacleType::Normal),
//! ]);
//! let choices = ScriptedChoices::picks([Side::Left, Side::Left]);
//! let mut engine = RoundEngine::new(stairs, choices, RecordingRenderer::default());
//!
//! let state = SessionState::new().accept_name("Ann").unwrap();
//! let summary = engine.run(state).unwrap();
//! assert_eq!(summary.score, 1);
//! assert_eq!(summary.reason, GameOverReason::WrongSide);
//! ```

pub mod engine;
pub mod script;
pub mod session;

pub use endless_stairs_core as core;
pub use endless_stairs_input as input;
pub use endless_stairs_types as types;

pub use engine::{Announcement, Renderer, RoundEngine, RoundFrame, RoundReport};
pub use session::{GameSummary, SessionError, SessionState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, ScriptedObstacles};
    use crate::script::{RecordingRenderer, ScriptedChoice, ScriptedChoices};
    use crate::types::{GameOverReason, Obstacle, ObstacleType, RoundOutcome, Side};
    use std::time::Duration;

    fn engine(
        stairs: Vec<Obstacle>,
        choices: ScriptedChoices,
    ) -> RoundEngine<ScriptedObstacles, ScriptedChoices, RecordingRenderer> {
        RoundEngine::new(
            ScriptedObstacles::new(stairs),
            choices,
            RecordingRenderer::default(),
        )
    }

    fn stair(side: Side, kind: ObstacleType) -> Obstacle {
        Obstacle::new(side, kind)
    }

    #[test]
    fn matching_normal_stair_scores_and_continues() {
        let mut e = engine(
            vec![stair(Side::Left, ObstacleType::Normal)],
            ScriptedChoices::picks([Side::Left]),
        );
        let mut player = Player::new("Ann");
        let report = e.play_round(&mut player, 1);
        assert_eq!(report.outcome, RoundOutcome::Advance(1));
        assert_eq!(player.score(), 1);
        assert_eq!(report.choice, Some(Side::Left));
        assert_eq!(e.renderer().messages, vec!["Good jump!".to_string()]);
        assert_eq!(e.renderer().pauses, vec![Duration::from_millis(200)]);
    }

    #[test]
    fn wrong_side_ends_with_score_intact() {
        let mut e = engine(
            vec![stair(Side::Right, ObstacleType::Normal)],
            ScriptedChoices::picks([Side::Left]),
        );
        let state = SessionState::Playing(Player::with_score("Bo", 3));
        let next = e.step(state, 1);
        assert_eq!(
            next,
            SessionState::GameOver {
                player: Player::with_score("Bo", 3),
                reason: GameOverReason::WrongSide,
            }
        );
        assert_eq!(
            e.renderer().messages,
            vec!["Oops! The stair was to the right.".to_string()]
        );
        assert!(e.renderer().pauses.is_empty());
    }

    #[test]
    fn timeout_ends_round() {
        let mut e = engine(
            vec![stair(Side::Left, ObstacleType::Super)],
            ScriptedChoices::new([ScriptedChoice::Timeout]),
        );
        let mut player = Player::with_score("Cy", 2);
        let report = e.play_round(&mut player, 1);
        assert_eq!(report.outcome, RoundOutcome::GameOver(GameOverReason::Timeout));
        assert_eq!(report.choice, None);
        assert_eq!(player.score(), 2);
        assert_eq!(e.renderer().messages, vec!["Time's up! You fell!".to_string()]);
        // Countdown reached zero on screen.
        assert_eq!(
            e.renderer().frames.last().map(|f| f.time_remaining),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn hazard_stairs_pause_longer() {
        let mut e = engine(
            vec![
                stair(Side::Left, ObstacleType::Falling),
                stair(Side::Right, ObstacleType::Spiked),
                stair(Side::Left, ObstacleType::Reverse),
            ],
            ScriptedChoices::picks([Side::Left, Side::Right, Side::Right]),
        );
        let mut player = Player::with_score("Dee", 4);
        for round in 1..=3 {
            e.play_round(&mut player, round);
        }
        assert_eq!(player.score(), 4);
        assert_eq!(
            e.renderer().pauses,
            vec![
                Duration::from_millis(400),
                Duration::from_millis(400),
                Duration::from_millis(200)
            ]
        );
    }

    #[test]
    fn budget_follows_score_and_type() {
        let mut e = engine(
            vec![
                stair(Side::Left, ObstacleType::Normal),
                stair(Side::Left, ObstacleType::Falling),
            ],
            ScriptedChoices::picks([Side::Left, Side::Left]),
        );
        let mut player = Player::with_score("Eve", 6);
        e.play_round(&mut player, 1);
        e.play_round(&mut player, 2);
        let (_, choices, _) = e.into_parts();
        // 5.0 - 3.0 = 2.0s, then score 7: 1.5s halved -> floor 0.9s.
        assert_eq!(
            choices.deadlines(),
            &[Duration::from_millis(2000), Duration::from_millis(900)]
        );
    }

    #[test]
    fn run_opens_and_closes_input() {
        let mut e = engine(
            vec![stair(Side::Left, ObstacleType::Normal)],
            ScriptedChoices::picks([Side::Left]),
        );
        let state = SessionState::new().accept_name("Fay").unwrap();
        let summary = e.run(state).unwrap();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.reason, GameOverReason::Timeout);
        assert_eq!(
            e.renderer().messages.last().map(String::as_str),
            Some("Game over, Fay! Final score: 1")
        );
        let (_, choices, _) = e.into_parts();
        assert_eq!(choices.open_count(), 1);
        assert_eq!(choices.close_count(), 1);
    }

    #[test]
    fn run_aborts_when_device_fails_to_open() {
        let mut e = engine(
            vec![stair(Side::Left, ObstacleType::Normal)],
            ScriptedChoices::picks([Side::Left]).failing_open(),
        );
        let state = SessionState::new().accept_name("Gus").unwrap();
        let err = e.run(state).unwrap_err();
        match err {
            SessionError::DeviceInit { summary, .. } => {
                assert_eq!(summary.final_message(), "Game over, Gus! Final score: 0");
                assert_eq!(summary.reason, GameOverReason::InputLost);
                assert_eq!(summary.rounds, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(e.renderer().frames.is_empty());
    }

    #[test]
    fn run_requires_a_player() {
        let mut e = engine(vec![], ScriptedChoices::default());
        assert!(matches!(
            e.run(SessionState::AwaitingName),
            Err(SessionError::NoPlayer)
        ));
    }

    #[test]
    fn quit_and_device_failure_end_session() {
        let mut e = engine(
            vec![stair(Side::Left, ObstacleType::Normal)],
            ScriptedChoices::new([ScriptedChoice::Quit]),
        );
        let summary = e.run(SessionState::Playing(Player::new("Hal"))).unwrap();
        assert_eq!(summary.reason, GameOverReason::Quit);

        let mut e = engine(
            vec![stair(Side::Left, ObstacleType::Normal)],
            ScriptedChoices::new([ScriptedChoice::Pick(Side::Left), ScriptedChoice::DeviceFailure]),
        );
        let summary = e.run(SessionState::Playing(Player::new("Ivy"))).unwrap();
        assert_eq!(summary.reason, GameOverReason::InputLost);
        assert_eq!(summary.score, 1);
    }

    #[test]
    fn step_leaves_finished_sessions_alone() {
        let mut e = engine(vec![], ScriptedChoices::default());
        let over = SessionState::GameOver {
            player: Player::new("Jo"),
            reason: GameOverReason::Timeout,
        };
        assert_eq!(e.step(over.clone(), 1), over);
        assert_eq!(e.step(SessionState::AwaitingName, 1), SessionState::AwaitingName);
    }
}
