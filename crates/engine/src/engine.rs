//! Round engine: drives one session from the first stair to game over.
//!
//! Per round: draw a stair, derive the [`RoundContext`] from the score at round
//! start, render it, wait for a side within the budget (re-rendering the
//! countdown), resolve, and apply the outcome. Surviving rounds end with a
//! short feedback pause.

use std::time::Duration;

use crate::core::{resolve, ObstacleSource, Player, RoundContext};
use crate::input::{AcquireError, ChoiceSource};
use crate::session::{GameSummary, SessionError, SessionState};
use crate::types::{GameOverReason, Obstacle, ObstacleType, RoundOutcome, Side};

/// What the renderer needs to draw one frame of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundFrame<'a> {
    pub player: &'a str,
    pub score: u32,
    pub round: u32,
    pub obstacle: Obstacle,
    pub polarity_inverted: bool,
    pub budget: Duration,
    pub time_remaining: Duration,
}

/// Feedback shown between rounds and at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement<'a> {
    Survived {
        kind: ObstacleType,
        delta: i32,
        score: u32,
    },
    Fell {
        reason: GameOverReason,
        stair_side: Side,
    },
    GameOver(&'a GameSummary),
}

impl Announcement<'_> {
    pub fn message(&self) -> String {
        match *self {
            Announcement::Survived { kind, .. } => match kind {
                ObstacleType::Normal | ObstacleType::Reverse => "Good jump!".to_string(),
                ObstacleType::Super => "Super stair! +5".to_string(),
                ObstacleType::Falling => "The stair collapsed under you, but you held on!".to_string(),
                ObstacleType::Spiked => "Ouch! Spikes! -1".to_string(),
            },
            Announcement::Fell { reason, stair_side } => match reason {
                GameOverReason::WrongSide => format!("Oops! The stair was to the {stair_side}."),
                GameOverReason::Timeout => "Time's up! You fell!".to_string(),
                GameOverReason::Quit => "You stepped off the stairs.".to_string(),
                GameOverReason::InputLost => "Lost the keyboard! You fell!".to_string(),
            },
            Announcement::GameOver(summary) => summary.final_message(),
        }
    }
}

/// Display sink for the engine.
pub trait Renderer {
    /// Draw the live stair and HUD. Must return quickly.
    fn render(&mut self, frame: &RoundFrame<'_>);

    fn announce(&mut self, announcement: &Announcement<'_>);

    /// Hold the current display for `duration`.
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// What happened in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub context: RoundContext,
    pub choice: Option<Side>,
    pub outcome: RoundOutcome,
    pub score: u32,
}

pub struct RoundEngine<G, C, R> {
    obstacles: G,
    input: C,
    renderer: R,
}

impl<G: ObstacleSource, C: ChoiceSource, R: Renderer> RoundEngine<G, C, R> {
    pub fn new(obstacles: G, input: C, renderer: R) -> Self {
        Self {
            obstacles,
            input,
            renderer,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (G, C, R) {
        (self.obstacles, self.input, self.renderer)
    }

    /// Play a single round against `player`.
    pub fn play_round(&mut self, player: &mut Player, round: u32) -> RoundReport {
        let context = RoundContext::new(self.obstacles.next_obstacle(), player.score());
        let obstacle = context.obstacle;
        log::debug!(
            "round {round}: {} stair on the {}, budget {:?}",
            obstacle.kind.as_str(),
            obstacle.side,
            context.effective_time_budget
        );

        let mut frame = RoundFrame {
            player: &player.name,
            score: player.score(),
            round,
            obstacle,
            polarity_inverted: context.polarity_inverted,
            budget: context.effective_time_budget,
            time_remaining: context.effective_time_budget,
        };
        self.renderer.render(&frame);

        let Self {
            input, renderer, ..
        } = self;
        let acquired = input.acquire_choice_with_countdown(
            context.effective_time_budget,
            &mut |remaining| {
                frame.time_remaining = remaining;
                renderer.render(&frame);
            },
        );

        let choice = acquired.as_ref().ok().copied();
        let outcome = match acquired {
            Ok(side) => resolve(obstacle, side, context.polarity_inverted, player.score()),
            Err(AcquireError::Timeout) => RoundOutcome::GameOver(GameOverReason::Timeout),
            Err(AcquireError::Quit) => RoundOutcome::GameOver(GameOverReason::Quit),
            Err(err) => {
                log::warn!("input failed mid-round: {err}");
                RoundOutcome::GameOver(GameOverReason::InputLost)
            }
        };

        match outcome {
            RoundOutcome::Advance(delta) => {
                let score = player.apply(delta);
                self.renderer.announce(&Announcement::Survived {
                    kind: obstacle.kind,
                    delta,
                    score,
                });
                self.renderer
                    .pause(Duration::from_millis(obstacle.kind.feedback_pause_ms()));
            }
            RoundOutcome::GameOver(reason) => {
                self.renderer.announce(&Announcement::Fell {
                    reason,
                    stair_side: obstacle.side,
                });
            }
        }

        RoundReport {
            round,
            context,
            choice,
            outcome,
            score: player.score(),
        }
    }

    /// Session transition function. Only `Playing` advances; other states are
    /// returned unchanged.
    pub fn step(&mut self, state: SessionState, round: u32) -> SessionState {
        match state {
            SessionState::Playing(mut player) => {
                let report = self.play_round(&mut player, round);
                match report.outcome {
                    RoundOutcome::Advance(_) => SessionState::Playing(player),
                    RoundOutcome::GameOver(reason) => SessionState::GameOver { player, reason },
                }
            }
            other => other,
        }
    }

    /// Open the input device, play until game over, close the device.
    ///
    /// Fails before the first round if the session has no player or the input
    /// device cannot be opened; the latter carries a zero-round summary.
    pub fn run(&mut self, state: SessionState) -> Result<GameSummary, SessionError> {
        let Some(player) = state.player() else {
            return Err(SessionError::NoPlayer);
        };

        if let Err(source) = self.input.open() {
            log::error!("failed to initialize keyboard input: {source}");
            let summary = GameSummary {
                name: player.name.clone(),
                score: player.score(),
                reason: GameOverReason::InputLost,
                rounds: 0,
            };
            return Err(SessionError::DeviceInit { source, summary });
        }

        let mut state = state;
        let mut rounds = 0;
        let summary = loop {
            state = match state {
                SessionState::Playing(player) => {
                    rounds += 1;
                    self.step(SessionState::Playing(player), rounds)
                }
                SessionState::GameOver { player, reason } => {
                    break GameSummary {
                        score: player.score(),
                        name: player.name,
                        reason,
                        rounds,
                    };
                }
                SessionState::AwaitingName => {
                    let _ = self.input.close();
                    return Err(SessionError::NoPlayer);
                }
            };
        };

        if let Err(err) = self.input.close() {
            log::warn!("failed to release keyboard input: {err}");
        }

        log::info!(
            "session over for {}: score {} after {} rounds ({:?})",
            summary.name,
            summary.score,
            summary.rounds,
            summary.reason
        );
        self.renderer.announce(&Announcement::GameOver(&summary));
        Ok(summary)
    }
}
