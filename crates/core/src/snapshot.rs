use serde::Serialize;

use crate::pieces::{Piece, Shape};
use crate::scoring::drop_interval_ms;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view handed to render sinks after every frame and command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// 0 for empty, 1..=7 for the kind that locked there
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    /// True while commands other than start/restart/pause have an effect
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            phase: Phase::Idle,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: drop_interval_ms(START_LEVEL),
            episode_id: 0,
            piece_id: 0,
        }
    }
}
