//! Host glue around the core game loop.
//!
//! The core never reads a clock and never draws. This crate supplies the
//! pieces a host needs to run it:
//!
//! - [`FrameClock`]: host timestamps to per-frame elapsed time
//! - [`RenderSink`]: where snapshots go ([`JsonLinesSink`], [`RecordingSink`])
//! - [`Session`]: drives one game, presents snapshots, records results
//! - [`EngineConfig`]: `TETRIS_*` environment variables
//! - [`HighScoreStore`]: best results as a JSON file

pub mod clock;
pub mod config;
pub mod score_store;
pub mod session;
pub mod sink;

pub use tetrion_core as core;
pub use tetrion_types as types;

pub use clock::FrameClock;
pub use config::EngineConfig;
pub use score_store::{HighScoreStore, HighScores};
pub use session::{GameResult, Session};
pub use sink::{JsonLinesSink, RecordingSink, RenderSink};
