//! Leaderboard persistence
//!
//! Scores are kept in a plain text file, one `<name>,<score>` entry per line.
//! Names are not escaped: a line is split on its first comma, and any line that
//! does not parse as `text,non-negative integer` is skipped on load.
//!
//! # Example
//!
//! ```no_run
//! use endless_stairs_leaderboard::{submit, FileLeaderboardStore, LeaderboardEntry, LeaderboardStore};
//!
//! let store = FileLeaderboardStore::new("leaderboard.txt");
//! submit(&store, LeaderboardEntry::new("Ann", 12), 10);
//! for (rank, entry) in store.top_n(10).unwrap_or_default().iter().enumerate() {
//!     println!("{}. {} - {}", rank + 1, entry.name, entry.score);
//! }
//! ```

pub mod file;
pub mod memory;

pub use file::{format_entries, parse_entries, FileLeaderboardStore};
pub use memory::MemoryLeaderboardStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A single leaderboard record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Leaderboard persistence.
pub trait LeaderboardStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError>;

    /// The best `n` entries, score descending. Ties keep file order.
    fn top_n(&self, n: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let mut entries = self.load()?;
        rank(&mut entries);
        entries.truncate(n);
        Ok(entries)
    }
}

/// Sort entries by score descending (stable).
pub fn rank(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Record a finished session.
///
/// Zero scores are not recorded. A store that fails to load is treated as empty,
/// and a failed save is logged and otherwise ignored. Returns the 1-based rank
/// of the new entry if it made the cut.
pub fn submit<S: LeaderboardStore + ?Sized>(
    store: &S,
    entry: LeaderboardEntry,
    keep: usize,
) -> Option<usize> {
    if entry.score == 0 {
        log::debug!("not recording zero score for {}", entry.name);
        return None;
    }

    let mut entries = match store.load() {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("could not load leaderboard, starting fresh: {err}");
            Vec::new()
        }
    };

    // New entries rank below existing ones with the same score.
    rank(&mut entries);
    let pos = entries
        .iter()
        .position(|e| entry.score > e.score)
        .unwrap_or(entries.len());
    entries.insert(pos, entry);
    entries.truncate(keep.max(1));

    if let Err(err) = store.save(&entries) {
        log::warn!("could not save leaderboard: {err}");
    }

    (pos < entries.len()).then_some(pos + 1)
}
