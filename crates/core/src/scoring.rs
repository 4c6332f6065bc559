//! Scoring module - line clear points, levels, and gravity speed
//!
//! - Points for a lock are `LINE_POINTS[lines] * level`.
//! - Level is `lines / 10 + 1`.
//! - Gravity interval is `max(100, 1000 - (level - 1) * 100)` milliseconds.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_POINTS,
    START_LEVEL,
};

/// Outcome of feeding one lock's line count into [`Progress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClearResult {
    pub points: u32,
    pub level_up: bool,
}

/// Points for clearing `lines` rows with one piece at `level`
/// Counts outside 1..=4 score nothing.
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_POINTS[lines as usize].saturating_mul(level)
}

/// Level reached after clearing `total_lines`
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level (in milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(START_LEVEL)
        .saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Score, level, lines and gravity for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: drop_interval_ms(START_LEVEL),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Record the rows cleared by one lock.
    ///
    /// Points use the level in effect before the clear. Level and interval
    /// only change when the new line total crosses a multiple of ten.
    pub fn apply_line_clear(&mut self, cleared: u32) -> LineClearResult {
        let points = line_clear_points(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);

        let new_level = level_for_lines(self.lines);
        let level_up = new_level > self.level;
        if level_up {
            self.level = new_level;
            self.drop_interval_ms = drop_interval_ms(new_level);
        }

        LineClearResult { points, level_up }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
