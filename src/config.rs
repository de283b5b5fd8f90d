//! Application configuration from environment variables.
//!
//! - `STAIRS_LEADERBOARD_PATH`: leaderboard file (default `leaderboard.txt`)
//! - `STAIRS_LEADERBOARD_SIZE`: entries kept and shown (default 10, min 1)
//! - `STAIRS_DISABLE_LEADERBOARD`: `1` or `true` to skip saving scores
//! - `STAIRS_LOG_PATH`: write logs to this file (logging is otherwise off
//!   unless `RUST_LOG` is set, since the game owns the terminal)

use std::path::PathBuf;

use crate::leaderboard::FileLeaderboardStore;
use crate::types::DEFAULT_LEADERBOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub leaderboard_path: PathBuf,
    pub leaderboard_size: usize,
    pub leaderboard_disabled: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from("leaderboard.txt"),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            leaderboard_disabled: false,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let leaderboard_path = lookup("STAIRS_LEADERBOARD_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.leaderboard_path);

        let leaderboard_size = lookup("STAIRS_LEADERBOARD_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.leaderboard_size)
            .max(1);

        let leaderboard_disabled = lookup("STAIRS_DISABLE_LEADERBOARD")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = lookup("STAIRS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            leaderboard_path,
            leaderboard_size,
            leaderboard_disabled,
            log_path,
        }
    }

    pub fn leaderboard_store(&self) -> FileLeaderboardStore {
        FileLeaderboardStore::new(&self.leaderboard_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("STAIRS_LEADERBOARD_PATH", "/tmp/scores.txt"),
            ("STAIRS_LEADERBOARD_SIZE", "5"),
            ("STAIRS_DISABLE_LEADERBOARD", "TRUE"),
            ("STAIRS_LOG_PATH", "stairs.log"),
        ]);
        assert_eq!(cfg.leaderboard_path, PathBuf::from("/tmp/scores.txt"));
        assert_eq!(cfg.leaderboard_size, 5);
        assert!(cfg.leaderboard_disabled);
        assert_eq!(cfg.log_path, Some(PathBuf::from("stairs.log")));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("STAIRS_LEADERBOARD_PATH", "  "),
            ("STAIRS_LEADERBOARD_SIZE", "lots"),
            ("STAIRS_DISABLE_LEADERBOARD", "maybe"),
            ("STAIRS_LOG_PATH", ""),
        ]);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(config(&[("STAIRS_LEADERBOARD_SIZE", "0")]).leaderboard_size, 1);
    }
}
