//! Session: the host-facing driver around one [`GameState`].
//!
//! A host calls [`Session::on_frame`] with its own timestamps and
//! [`Session::on_command`] for every input. The session turns timestamps into
//! elapsed time, advances the game, refreshes one reusable snapshot and
//! presents it to a [`RenderSink`]. Finished games are folded into the high
//! scores.

use anyhow::Result;

use crate::clock::FrameClock;
use crate::config::EngineConfig;
use crate::core::{Advance, GameSnapshot, GameState, PieceGenerator};
use crate::score_store::{HighScoreStore, HighScores};
use crate::sink::RenderSink;
use crate::types::{GameAction, LockEvent};

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub episode_id: u32,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    /// At least one best value improved.
    pub new_best: bool,
}

pub struct Session {
    state: GameState,
    clock: FrameClock,
    snapshot: GameSnapshot,
    best: HighScores,
    store: Option<HighScoreStore>,
    results: Vec<GameResult>,
    /// Messages that could not be logged while the terminal was in raw mode.
    warnings: Vec<String>,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        let mut snapshot = GameSnapshot::default();
        state.snapshot_into(&mut snapshot);
        Self {
            state,
            clock: FrameClock::new(),
            snapshot,
            best: HighScores::default(),
            store: None,
            results: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Build a session from configuration.
    ///
    /// A high-score file that cannot be read is reported as a warning and
    /// play starts from empty records.
    pub fn from_config(config: &EngineConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => PieceGenerator::new(seed),
            None => PieceGenerator::from_entropy(),
        };
        let mut session = Self::new(GameState::with_generator(generator));

        if let Some(path) = &config.high_score_path {
            session = session.with_store(HighScoreStore::new(path));
        }
        if config.autostart {
            session.state.start();
            session.refresh();
        }
        session
    }

    /// Attach a high-score store and load its current records.
    pub fn with_store(mut self, store: HighScoreStore) -> Self {
        match store.load() {
            Ok(best) => self.best = best,
            Err(e) => self
                .warnings
                .push(format!("[HighScore] load failed, starting fresh: {:#}", e)),
        }
        self.store = Some(store);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn high_scores(&self) -> HighScores {
        self.best
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    /// Drain queued log lines.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// One host frame: advance by the time since the previous frame and
    /// present. Presents even when nothing changed.
    pub fn on_frame<S: RenderSink + ?Sized>(&mut self, now_ms: u64, sink: &mut S) -> Result<bool> {
        let elapsed = self.clock.elapsed_ms(now_ms);
        let changed = self.state.advance(elapsed);
        if changed {
            self.observe_lock();
        }
        self.refresh();
        sink.present(&self.snapshot)?;
        Ok(changed)
    }

    /// Apply one command; presents only if it changed anything.
    pub fn on_command<S: RenderSink + ?Sized>(
        &mut self,
        action: GameAction,
        sink: &mut S,
    ) -> Result<bool> {
        let changed = self.state.apply_action(action);
        if changed {
            self.observe_lock();
            self.refresh();
            sink.present(&self.snapshot)?;
        }
        Ok(changed)
    }

    /// Apply a command by name; unknown names change nothing.
    pub fn on_named<S: RenderSink + ?Sized>(&mut self, name: &str, sink: &mut S) -> Result<bool> {
        match GameAction::from_str(name) {
            Some(action) => self.on_command(action, sink),
            None => Ok(false),
        }
    }

    fn refresh(&mut self) {
        self.state.snapshot_into(&mut self.snapshot);
    }

    fn observe_lock(&mut self) {
        if let Some(LockEvent {
            game_over: true, ..
        }) = self.state.take_last_event()
        {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let score = self.state.score();
        let lines = self.state.lines();
        let level = self.state.level();
        let new_best = self.best.record(score, lines, level);

        if new_best {
            if let Some(store) = &self.store {
                if let Err(e) = store.save(&self.best) {
                    self.warnings
                        .push(format!("[HighScore] save failed: {:#}", e));
                }
            }
        }

        self.results.push(GameResult {
            episode_id: self.state.episode_id(),
            score,
            lines,
            level,
            new_best,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use crate::types::Phase;

    fn running_session() -> Session {
        let mut state = GameState::new(9);
        state.start();
        Session::new(state)
    }

    #[test]
    fn frame_presents_every_time() {
        let mut session = running_session();
        let mut sink = RecordingSink::new();

        assert!(!session.on_frame(0, &mut sink).unwrap());
        assert!(!session.on_frame(16, &mut sink).unwrap());
        assert_eq!(sink.frames.len(), 2);
    }

    #[test]
    fn gravity_follows_host_timestamps() {
        let mut session = running_session();
        let mut sink = RecordingSink::new();
        let y0 = session.snapshot().current.unwrap().y;

        session.on_frame(10_000, &mut sink).unwrap();
        session.on_frame(11_000, &mut sink).unwrap();
        assert_eq!(session.snapshot().current.unwrap().y, y0);

        assert!(session.on_frame(11_001, &mut sink).unwrap());
        assert_eq!(sink.last().unwrap().current.unwrap().y, y0 + 1);
    }

    #[test]
    fn rejected_command_is_not_presented() {
        let mut session = Session::new(GameState::new(9));
        let mut sink = RecordingSink::new();

        assert!(!session.on_command(GameAction::MoveLeft, &mut sink).unwrap());
        assert!(!session.on_named("warp", &mut sink).unwrap());
        assert!(sink.frames.is_empty());

        assert!(session.on_named("start", &mut sink).unwrap());
        assert_eq!(sink.last().unwrap().phase, Phase::Running);
    }

    #[test]
    fn game_over_is_recorded_once() {
        let mut session = running_session();
        let mut sink = RecordingSink::new();

        while session.state().phase() == Phase::Running {
            session.on_command(GameAction::HardDrop, &mut sink).unwrap();
        }

        assert_eq!(session.state().phase(), Phase::GameOver);
        assert_eq!(session.results().len(), 1);
        let result = session.results()[0];
        assert_eq!(result.episode_id, 1);
        assert_eq!(result.score, session.state().score());

        // Further frames do not record the same game again.
        session.on_frame(0, &mut sink).unwrap();
        session.on_frame(5_000, &mut sink).unwrap();
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn autostart_from_config() {
        let config = EngineConfig {
            seed: Some(4),
            autostart: true,
            ..EngineConfig::default()
        };
        let session = Session::from_config(&config);
        assert_eq!(session.snapshot().phase, Phase::Running);
        assert_eq!(session.state().seed(), 4);
        assert!(session.snapshot().current.is_some());
    }
}
