//! Terminal display for the round engine.
//!
//! Bridges engine frames and announcements onto the framebuffer view.

use std::time::Duration;

use anyhow::Result;

use crate::engine::{Announcement, Renderer, RoundFrame};
use crate::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use crate::types::Obstacle;

/// Owned copy of the last frame, so feedback can be drawn over it.
#[derive(Debug, Clone)]
struct LastFrame {
    player: String,
    score: u32,
    round: u32,
    obstacle: Obstacle,
    time_remaining: Duration,
}

pub struct TerminalDisplay {
    view: GameView,
    term: TerminalRenderer,
    fb: FrameBuffer,
    last: Option<LastFrame>,
    banner: Option<String>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self {
            view: GameView::default(),
            term: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            last: None,
            banner: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    fn redraw(&mut self) {
        let Some(last) = &self.last else {
            return;
        };
        let hud = HudView {
            player: &last.player,
            score: last.score,
            obstacle: last.obstacle,
            time_remaining: last.time_remaining,
            banner: self.banner.as_deref(),
        };
        self.view.render_into(&hud, Self::viewport(), &mut self.fb);
        self.flush();
    }

    fn flush(&mut self) {
        if let Err(err) = self.term.draw_swap(&mut self.fb) {
            log::warn!("failed to draw frame: {err}");
        }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalDisplay {
    fn render(&mut self, frame: &RoundFrame<'_>) {
        let new_round = self.last.as_ref().map(|l| l.round) != Some(frame.round);
        if new_round {
            self.banner = None;
        }
        self.last = Some(LastFrame {
            player: frame.player.to_string(),
            score: frame.score,
            round: frame.round,
            obstacle: frame.obstacle,
            time_remaining: frame.time_remaining,
        });
        self.redraw();
    }

    fn announce(&mut self, announcement: &Announcement<'_>) {
        match announcement {
            Announcement::GameOver(summary) => {
                let message = summary.final_message();
                let lines = [crate::term::TITLE, "", message.as_str()];
                self.view
                    .render_lines_into(&lines, Self::viewport(), &mut self.fb);
                self.flush();
            }
            Announcement::Survived { score, .. } => {
                if let Some(last) = self.last.as_mut() {
                    last.score = *score;
                }
                self.banner = Some(announcement.message());
                self.redraw();
            }
            Announcement::Fell { .. } => {
                self.banner = Some(announcement.message());
                self.redraw();
            }
        }
    }
}
