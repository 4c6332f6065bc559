//! Engine configuration from environment variables.
//!
//! - `TETRIS_SEED`: piece generator seed (default: random)
//! - `TETRIS_FRAME_MS`: host frame period in milliseconds (default: 16)
//! - `TETRIS_HIGH_SCORE_PATH`: high-score JSON file (default: none)
//! - `TETRIS_SNAPSHOT_LOG`: also write snapshots as JSON lines here (default: none)
//! - `TETRIS_AUTOSTART`: "1" or "true" to start playing immediately
//! - `TETRIS_QUIET`: "1" or "true" to suppress log lines

use std::path::PathBuf;

use crate::types::DEFAULT_FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    pub frame_ms: u32,
    pub high_score_path: Option<PathBuf>,
    pub snapshot_log: Option<PathBuf>,
    pub autostart: bool,
    pub quiet: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            high_score_path: None,
            snapshot_log: None,
            autostart: false,
            quiet: false,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup("TETRIS_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        let high_score_path = lookup("TETRIS_HIGH_SCORE_PATH").and_then(non_empty_path);
        let snapshot_log = lookup("TETRIS_SNAPSHOT_LOG").and_then(non_empty_path);

        let autostart = lookup("TETRIS_AUTOSTART").is_some_and(|s| is_truthy(&s));
        let quiet = lookup("TETRIS_QUIET").is_some_and(|s| is_truthy(&s));

        Self {
            seed,
            frame_ms,
            high_score_path,
            snapshot_log,
            autostart,
            quiet,
        }
    }
}

fn non_empty_path(s: String) -> Option<PathBuf> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(PathBuf::from(s))
    }
}

fn is_truthy(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
