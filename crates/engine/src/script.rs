//! Scripted collaborators for driving the engine without a terminal.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::engine::{Announcement, Renderer, RoundFrame};
use crate::input::{AcquireError, ChoiceSource};
use crate::types::{Obstacle, Side};

/// One scripted answer to `acquire_choice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedChoice {
    Pick(Side),
    Timeout,
    Quit,
    DeviceFailure,
}

/// Answers choice requests from a script. An exhausted script times out.
#[derive(Debug, Default)]
pub struct ScriptedChoices {
    script: VecDeque<ScriptedChoice>,
    deadlines: Vec<Duration>,
    fail_open: bool,
    opened: u32,
    closed: u32,
}

impl ScriptedChoices {
    pub fn new(script: impl IntoIterator<Item = ScriptedChoice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn picks(sides: impl IntoIterator<Item = Side>) -> Self {
        Self::new(sides.into_iter().map(ScriptedChoice::Pick))
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// Deadlines requested so far, one per round.
    pub fn deadlines(&self) -> &[Duration] {
        &self.deadlines
    }

    pub fn open_count(&self) -> u32 {
        self.opened
    }

    pub fn close_count(&self) -> u32 {
        self.closed
    }
}

impl ChoiceSource for ScriptedChoices {
    fn acquire_choice_with_countdown(
        &mut self,
        deadline: Duration,
        on_tick: &mut dyn FnMut(Duration),
    ) -> Result<Side, AcquireError> {
        self.deadlines.push(deadline);
        on_tick(deadline);
        match self.script.pop_front().unwrap_or(ScriptedChoice::Timeout) {
            ScriptedChoice::Pick(side) => Ok(side),
            ScriptedChoice::Timeout => {
                on_tick(Duration::ZERO);
                Err(AcquireError::Timeout)
            }
            ScriptedChoice::Quit => Err(AcquireError::Quit),
            ScriptedChoice::DeviceFailure => Err(AcquireError::Device(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted keyboard failure",
            ))),
        }
    }

    fn open(&mut self) -> io::Result<()> {
        if self.fail_open {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no keyboard"));
        }
        self.opened += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed += 1;
        Ok(())
    }
}

/// A rendered frame, owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    pub score: u32,
    pub round: u32,
    pub obstacle: Obstacle,
    pub time_remaining: Duration,
}

/// Renderer that records instead of drawing, and never sleeps.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<FrameRecord>,
    pub messages: Vec<String>,
    pub pauses: Vec<Duration>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RoundFrame<'_>) {
        self.frames.push(FrameRecord {
            score: frame.score,
            round: frame.round,
            obstacle: frame.obstacle,
            time_remaining: frame.time_remaining,
        });
    }

    fn announce(&mut self, announcement: &Announcement<'_>) {
        self.messages.push(announcement.message());
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
