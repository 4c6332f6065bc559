//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Key repeat
//! from the terminal is treated like a fresh press; releases are ignored.

pub mod map;

pub use tetrion_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
