//! In-memory leaderboard for tests, with an optional failing mode.

use std::cell::{Cell, RefCell};
use std::io;

use crate::{LeaderboardEntry, LeaderboardError, LeaderboardStore};

#[derive(Debug, Default)]
pub struct MemoryLeaderboardStore {
    entries: RefCell<Vec<LeaderboardEntry>>,
    saves: Cell<usize>,
    failing: bool,
}

impl MemoryLeaderboardStore {
    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
            ..Self::default()
        }
    }

    /// Make every load and save fail.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    fn check(&self) -> Result<(), LeaderboardError> {
        if self.failing {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "store unavailable").into());
        }
        Ok(())
    }
}

impl LeaderboardStore for MemoryLeaderboardStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.check()?;
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        self.check()?;
        *self.entries.borrow_mut() = entries.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
