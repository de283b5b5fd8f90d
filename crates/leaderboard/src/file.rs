//! Plain text leaderboard file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{LeaderboardEntry, LeaderboardError, LeaderboardStore};

/// Leaderboard stored at a file path. A missing file is an empty leaderboard.
#[derive(Debug, Clone)]
pub struct FileLeaderboardStore {
    path: PathBuf,
}

impl FileLeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for FileLeaderboardStore {
    fn load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(parse_entries(&bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        fs::write(&self.path, format_entries(entries))?;
        log::info!(
            "leaderboard saved ({} entries) to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Parse leaderboard file contents, skipping lines that are not UTF-8 `name,score`.
pub fn parse_entries(bytes: &[u8]) -> Vec<LeaderboardEntry> {
    bytes
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parsed = std::str::from_utf8(line).ok().and_then(parse_line);
            if parsed.is_none() {
                log::debug!(
                    "skipping malformed leaderboard line: {:?}",
                    String::from_utf8_lossy(line)
                );
            }
            parsed
        })
        .collect()
}

fn parse_line(line: &str) -> Option<LeaderboardEntry> {
    let (name, score) = line.split_once(',')?;
    let score = score.trim_end_matches('\r').parse::<u32>().ok()?;
    Some(LeaderboardEntry::new(name, score))
}

/// Serialize entries, one `name,score` per line.
pub fn format_entries(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{},{}", e.name, e.score))
        .collect::<Vec<_>>()
        .join("\n")
}
