//! GameView: maps the live round into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::stairs::{stair_art, stair_color, type_badge, STAIR_ART_HEIGHT};
use crate::types::{Obstacle, Side};

/// Rows in the stair frame: blank padding above the art.
pub const FRAME_HEIGHT: usize = 9;

pub const TITLE: &str = "Endless Stairs! (Use \u{2190}/\u{2192} arrows or l/r keys)";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything drawn for one frame of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    pub player: &'a str,
    pub score: u32,
    pub obstacle: Obstacle,
    pub time_remaining: Duration,
    /// Feedback line under the prompt.
    pub banner: Option<&'a str>,
}

/// The stair frame: padding rows then the art for `side`.
pub fn stair_frame(side: Side) -> ArrayVec<&'static str, FRAME_HEIGHT> {
    let mut frame = ArrayVec::new();
    while frame.len() < FRAME_HEIGHT - STAIR_ART_HEIGHT {
        frame.push("");
    }
    for line in stair_art(side) {
        frame.push(*line);
    }
    frame
}

/// Countdown text with one decimal, rounded up so it never shows 0.0 early.
pub fn format_seconds(remaining: Duration) -> String {
    let tenths = (remaining.as_millis() + 99) / 100;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// A lightweight terminal view for the stairs game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    margin_x: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { margin_x: 2 }
    }
}

impl GameView {
    pub fn new(margin_x: u16) -> Self {
        Self { margin_x }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, hud: &HudView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let x = self.margin_x;
        let text = CellStyle::default();
        let title = CellStyle::fg(Rgb::new(120, 200, 255)).bold();
        let dim = CellStyle::fg(Rgb::new(150, 150, 150));

        fb.put_str(x, 0, TITLE, title);
        fb.put_str(x, 1, &format!("Climber: {}", hud.player), dim);

        let art = CellStyle::fg(stair_color(hud.obstacle.kind));
        let mut y = 2;
        for line in stair_frame(hud.obstacle.side) {
            fb.put_str(x, y, line, art);
            y += 1;
        }

        if let Some((label, color)) = type_badge(hud.obstacle.kind) {
            fb.put_str(x, y, label, CellStyle::fg(color).bold());
        }
        y += 2;

        fb.put_str(x, y, &format!("Score: {}", hud.score), text.bold());
        y += 1;

        let warn = hud.time_remaining <= Duration::from_secs(1);
        let timer = if warn {
            CellStyle::fg(Rgb::new(240, 90, 90)).bold()
        } else {
            text
        };
        fb.put_str(
            x,
            y,
            &format!(
                "You have {} seconds to choose!",
                format_seconds(hud.time_remaining)
            ),
            timer,
        );
        y += 1;

        fb.put_str(x, y, "Jump left or right? (l/r)", text);
        y += 2;

        if let Some(banner) = hud.banner {
            fb.put_str(x, y, banner, CellStyle::fg(Rgb::new(120, 230, 120)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(hud, viewport, &mut fb);
        fb
    }

    /// Render a plain block of lines (menus, final score).
    pub fn render_lines_into(&self, lines: &[&str], viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        for (y, line) in (0..viewport.height).zip(lines) {
            fb.put_str(self.margin_x, y, line, CellStyle::default());
        }
    }
}
