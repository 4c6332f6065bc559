//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all mutable game state. It does no
//! I/O and never reads the clock: the host feeds elapsed time through
//! [`Advance`] and commands through [`GameState::apply_action`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with merging and line clearing
//! - [`pieces`]: shape matrices and clockwise rotation
//! - [`collision`]: legality check for a piece at a position
//! - [`rng`]: seeded uniform piece generator
//! - [`scoring`]: points, levels and gravity interval
//! - [`game_state`]: the loop controller (phases, gravity, locking)
//! - [`snapshot`]: read-only views for renderers
//!
//! # Game Rules
//!
//! - Seven kinds, each drawn with equal probability (no bag)
//! - Clockwise rotation only, rejected outright on collision (no wall kicks)
//! - A piece locks on the gravity step or soft drop that cannot descend
//! - Game over when a freshly promoted piece collides where it spawns
//!
//! # Example
//!
//! ```
//! use tetrion_core::{Advance, GameState};
//! use tetrion_core::types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//! assert_eq!(game.piece_id(), 2);
//!
//! // Gravity fires once the counter exceeds the interval.
//! game.advance(1001);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetrion_types as types;

pub use board::Board;
pub use collision::{can_descend, collides};
pub use game_state::{Advance, GameState};
pub use pieces::{shape_of, Piece, Shape};
pub use rng::PieceGenerator;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points, LineClearResult, Progress};
pub use snapshot::{GameSnapshot, PieceSnapshot};
