//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data (plus serde derives), so it can be shared by
//! the core rules, the session driver, and any render sink.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing and Progression
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Interval floor |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level |
//! | `DEFAULT_FRAME_MS` | 16 | Host frame period (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tetrion_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.id(), 3);
//! assert_eq!(PieceKind::from_id(3), Some(piece));
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert_eq!(GameAction::from_str("hard-drop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Largest shape matrix side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines cleared per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at the start of every game
pub const START_LEVEL: u32 = 1;

/// Default host frame period in milliseconds (16ms ≈ 60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Line clear scoring table
///
/// Base points for clearing N lines with one piece, multiplied by the
/// current level:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// The declaration order fixes the type identifier written into board
/// cells: `I = 1` through `L = 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// All kinds in type-identifier order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Index into the shape table (0..=6)
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Piece kind for a shape table index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Type identifier stored in board cells (1..=7)
    pub fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Piece kind for a board cell value; `0` and unknown values are `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrion_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(7), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => None,
            n => Self::from_index(n as usize - 1),
        }
    }

    /// Display color as `[r, g, b]`
    pub fn color(self) -> [u8; 3] {
        match self {
            PieceKind::I => [0xFF, 0x0D, 0x72],
            PieceKind::O => [0x0D, 0xC2, 0xFF],
            PieceKind::T => [0x0D, 0xFF, 0x72],
            PieceKind::S => [0xF5, 0x38, 0xFF],
            PieceKind::Z => [0xFF, 0x8E, 0x0D],
            PieceKind::J => [0xFF, 0xE1, 0x38],
            PieceKind::L => [0x38, 0x77, 0xFF],
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Commands accepted by the game loop controller
///
/// Human input and scripted drivers both go through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if it cannot descend
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause
    Pause,
    /// Start a game from idle or game over
    Start,
    /// Reset and start a fresh game
    Restart,
}

impl GameAction {
    /// Parse an action name
    ///
    /// Matching ignores case and `-`/`_` separators, so `moveLeft`,
    /// `move-left` and `MOVE_LEFT` are the same command.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrion_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("soft_drop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Controller lifecycle
///
/// ```text
/// Idle --start--> Running <--pause--> Paused
///                    |
///             spawn collides
///                    v
///                 GameOver --start/restart--> Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Emitted each time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
    /// The piece spawned after this lock collided.
    pub game_over: bool,
}
