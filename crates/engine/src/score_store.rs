//! High-score persistence: a single JSON blob on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Best results seen so far. Each field is tracked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    pub best_score: u32,
    pub best_lines: u32,
    pub best_level: u32,
}

impl HighScores {
    /// Fold one finished game in. Returns true if any best value improved.
    pub fn record(&mut self, score: u32, lines: u32, level: u32) -> bool {
        let before = *self;
        self.best_score = self.best_score.max(score);
        self.best_lines = self.best_lines.max(lines);
        self.best_level = self.best_level.max(level);
        *self != before
    }
}

/// File-backed store for [`HighScores`].
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored blob. A missing file is an empty record, not an error.
    pub fn load(&self) -> Result<HighScores> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScores::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", self.path.display()))
    }

    /// Overwrite the stored blob, creating parent directories as needed.
    pub fn save(&self, scores: &HighScores) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_vec_pretty(scores)?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))
    }
}
