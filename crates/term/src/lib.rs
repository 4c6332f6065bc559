//! Terminal game renderer.
//!
//! Snapshots are drawn into a plain framebuffer of styled cells
//! ([`GameView`]), then flushed to the terminal with run-level diffs
//! ([`TerminalRenderer`]). [`TerminalSink`] wires both into the engine's
//! render-sink seam.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use tetrion_core as core;
pub use tetrion_engine as engine;
pub use tetrion_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
