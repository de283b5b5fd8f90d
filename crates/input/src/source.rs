//! Raw key sources.
//!
//! A [`KeySource`] is the blocking side of input acquisition: it is only ever
//! read from the listener thread, one reader at a time.

use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;

use crate::map::{handle_key_event, KeySignal};

/// A device that yields key signals.
pub trait KeySource: Send + 'static {
    /// Acquire the device. Called once per session.
    fn open(&mut self) -> io::Result<()>;

    /// Release the device. Must be safe to call more than once.
    fn close(&mut self) -> io::Result<()>;

    /// Wait up to `wait` for one key. `Ok(None)` means nothing arrived.
    fn next_key(&mut self, wait: Duration) -> io::Result<Option<KeySignal>>;

    /// Drop keys that were buffered before the current round started.
    fn discard_pending(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keyboard input through crossterm in raw mode.
#[derive(Debug, Default)]
pub struct CrosstermKeySource {
    raw: bool,
}

impl CrosstermKeySource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for CrosstermKeySource {
    fn open(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    fn next_key(&mut self, wait: Duration) -> io::Result<Option<KeySignal>> {
        if !event::poll(wait)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(handle_key_event(key))),
            _ => Ok(Some(KeySignal::Unrecognized)),
        }
    }

    fn discard_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let _ = event::read()?;
        }
        Ok(())
    }
}

impl Drop for CrosstermKeySource {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// One scripted key: arrives `after` the previous one was read.
#[derive(Debug)]
pub enum ScriptedKey {
    Key { after: Duration, signal: KeySignal },
    Fail { after: Duration, kind: io::ErrorKind },
}

/// Replays a fixed key script in real time.
///
/// Once the script is exhausted it behaves like an idle keyboard.
#[derive(Debug, Default)]
pub struct ScriptedKeySource {
    script: VecDeque<ScriptedKey>,
    reads: usize,
    fail_open: bool,
}

impl ScriptedKeySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, after: Duration, signal: KeySignal) -> Self {
        self.script.push_back(ScriptedKey::Key { after, signal });
        self
    }

    pub fn fail(mut self, after: Duration, kind: io::ErrorKind) -> Self {
        self.script.push_back(ScriptedKey::Fail { after, kind });
        self
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// Number of `next_key` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl KeySource for ScriptedKeySource {
    fn open(&mut self) -> io::Result<()> {
        if self.fail_open {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no keyboard"));
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn next_key(&mut self, wait: Duration) -> io::Result<Option<KeySignal>> {
        self.reads += 1;
        let after = match self.script.front_mut() {
            None => {
                thread::sleep(wait);
                return Ok(None);
            }
            Some(ScriptedKey::Key { after, .. }) | Some(ScriptedKey::Fail { after, .. }) => after,
        };

        if *after > wait {
            *after -= wait;
            thread::sleep(wait);
            return Ok(None);
        }
        thread::sleep(*after);

        match self.script.pop_front() {
            Some(ScriptedKey::Key { signal, .. }) => Ok(Some(signal)),
            Some(ScriptedKey::Fail { kind, .. }) => Err(io::Error::new(kind, "scripted failure")),
            None => Ok(None),
        }
    }
}
