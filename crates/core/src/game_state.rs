//! Game state module - the game loop controller
//!
//! This module ties together the board, pieces, generator and scoring. It owns
//! every piece of mutable game state and changes it only from
//! [`GameState::apply_action`] and [`Advance::advance`]. Nothing here blocks
//! or schedules: the host feeds elapsed time and commands.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::Progress;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, LockEvent, Phase};

/// Clock seam between the host and the game loop.
pub trait Advance {
    /// Feed the time since the previous call; returns true if anything
    /// visible changed.
    fn advance(&mut self, elapsed_ms: u32) -> bool;
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    generator: PieceGenerator,
    progress: Progress,
    phase: Phase,
    /// Time accumulated toward the next gravity step.
    drop_counter_ms: u32,
    /// Monotonic game id (increments on every start/restart).
    episode_id: u32,
    /// Pieces spawned in the current game, the current one included.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_generator(PieceGenerator::new(seed))
    }

    pub fn with_generator(generator: PieceGenerator) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            generator,
            progress: Progress::new(),
            phase: Phase::Idle,
            drop_counter_ms: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.progress.drop_interval_ms()
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start a game from idle or game over. No-op while a game is live.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::GameOver => {
                self.reset();
                true
            }
            Phase::Running | Phase::Paused => false,
        }
    }

    /// Throw away the current game and start a new one.
    pub fn restart(&mut self) -> bool {
        self.reset();
        true
    }

    /// Running <-> Paused. No-op in the other phases.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Idle | Phase::GameOver => return false,
        };
        true
    }

    fn reset(&mut self) {
        self.board.clear();
        self.progress = Progress::new();
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = Phase::Running;

        self.current = Some(self.generator.next_piece());
        self.next = Some(self.generator.next_piece());
        self.piece_id = 1;
    }

    /// Promote the next piece and draw a new one behind it.
    ///
    /// A promoted piece that collides where it spawns ends the game. It stays
    /// as the current piece for display but is never merged.
    fn spawn_next(&mut self) {
        let incoming = self
            .next
            .take()
            .unwrap_or_else(|| self.generator.next_piece());
        self.next = Some(self.generator.next_piece());
        self.piece_id = self.piece_id.wrapping_add(1);

        if collides(&self.board, &incoming) {
            self.phase = Phase::GameOver;
        }
        self.current = Some(incoming);
    }

    /// Try to move the current piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let candidate = current.shifted(dx, dy);
        if collides(&self.board, &candidate) {
            return false;
        }
        self.current = Some(candidate);
        true
    }

    /// Try to rotate the current piece clockwise (no wall kicks)
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let candidate = current.rotated();
        if collides(&self.board, &candidate) {
            return false;
        }
        self.current = Some(candidate);
        true
    }

    /// One gravity step: descend a row, or lock if the row below is blocked.
    fn drop_step(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Descend until the next step would collide, then lock.
    /// Returns the number of rows descended.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.lock_piece();
        distance
    }

    /// Merge the current piece, clear lines, score, and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.board.merge(&piece);
        let cleared = self.board.clear_lines();
        let result = self.progress.apply_line_clear(cleared);

        self.spawn_next();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared,
            points: result.points,
            level_up: result.level_up,
            game_over: self.game_over(),
        });
    }

    /// Apply a game action
    ///
    /// Returns true if the state changed. Illegal moves, and movement while
    /// not running, are silently ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
            GameAction::Pause => self.toggle_pause(),
            _ if self.phase != Phase::Running => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::SoftDrop => self.drop_step(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Apply an action by name; unknown names are ignored.
    pub fn apply_named(&mut self, name: &str) -> bool {
        GameAction::from_str(name).is_some_and(|action| self.apply_action(action))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.current = self.current.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.phase = self.phase;
        out.score = self.progress.score();
        out.level = self.progress.level();
        out.lines = self.progress.lines();
        out.drop_interval_ms = self.progress.drop_interval_ms();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Advance for GameState {
    /// Gravity. The counter only accumulates while running, and at most one
    /// row is dropped per call however much time has passed.
    fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.progress.drop_interval_ms() {
            let changed = self.drop_step();
            self.drop_counter_ms = 0;
            return changed;
        }

        false
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
