//! Game state module - the spawn / fall / lock / clear state machine
//!
//! [`GameState`] owns the board, the current and next piece, the score and the
//! run state. Frontends drive it with commands and a pull-based
//! [`GameState::tick`] that receives a monotonically increasing timestamp; the
//! state machine decides on its own when gravity fires.
//!
//! Commands that are not allowed in the current run state are ignored and
//! report `false`. Only `start` is accepted everywhere.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::{Piece, PieceFactory};
use crate::scoring::ScoreState;
use crate::snapshot::{GameSnapshot, ScoreSnapshot};
use crate::transform::{collides, hard_drop, rotate_clockwise, soft_drop, try_move};
use crate::types::{Command, GameEvent, RunState};

/// Pending events kept for observers; the oldest is dropped when full.
const EVENT_CAPACITY: usize = 32;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    factory: PieceFactory,
    score: ScoreState,
    run_state: RunState,
    /// Timestamp of the last gravity step; None until the first tick after
    /// start or resume.
    last_drop_ms: Option<u64>,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut factory = PieceFactory::seeded(seed);
        let current = factory.spawn();
        let next = factory.spawn();

        Self {
            board: Board::new(),
            current,
            next,
            factory,
            score: ScoreState::new(),
            run_state: RunState::Idle,
            last_drop_ms: None,
            events: ArrayVec::new(),
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    pub fn lines(&self) -> u32 {
        self.score.lines()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.score.drop_interval_ms()
    }

    pub fn score_snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            score: self.score.score(),
            level: self.score.level(),
            lines: self.score.lines(),
        }
    }

    /// Fill `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        let started = self.run_state != RunState::Idle;
        out.current = started.then_some(self.current);
        out.next = started.then_some(self.next);
        out.score = self.score_snapshot();
        out.drop_interval_ms = self.score.drop_interval_ms();
        out.run_state = self.run_state;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take all events recorded since the last call, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Start (or restart) a game from any state.
    pub fn start(&mut self) -> bool {
        self.board.clear();
        self.score = ScoreState::new();
        self.current = self.factory.spawn();
        self.next = self.factory.spawn();
        self.run_state = RunState::Running;
        self.last_drop_ms = None;
        self.emit(GameEvent::Started);
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.run_state != RunState::Running {
            return false;
        }
        self.run_state = RunState::Paused;
        self.emit(GameEvent::Paused);
        true
    }

    /// Resume a paused game. The next tick re-establishes the timing baseline,
    /// so time spent paused never causes a catch-up drop.
    pub fn resume(&mut self) -> bool {
        if self.run_state != RunState::Paused {
            return false;
        }
        self.run_state = RunState::Running;
        self.last_drop_ms = None;
        self.emit(GameEvent::Resumed);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.run_state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
            RunState::Idle | RunState::GameOver => false,
        }
    }

    fn running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i8) -> bool {
        if !self.running() || !try_move(&self.board, &mut self.current, dx) {
            return false;
        }
        self.emit(GameEvent::Moved { dx });
        true
    }

    pub fn rotate(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        match rotate_clockwise(&self.board, &mut self.current) {
            Some(kick) => {
                self.emit(GameEvent::Rotated { kick });
                true
            }
            None => false,
        }
    }

    /// Manual one-row drop. Always worth a point; locks the piece if it
    /// cannot move.
    pub fn soft_drop(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        self.score.add_drop_points(1, false);
        self.fall(true);
        true
    }

    /// Drop to the bottom and lock immediately.
    pub fn hard_drop(&mut self) -> bool {
        if !self.running() {
            return false;
        }
        let cells = hard_drop(&self.board, &mut self.current);
        self.score.add_drop_points(cells, true);
        self.emit(GameEvent::HardDropped { cells });
        self.lock_current();
        true
    }

    /// Advance the game clock.
    ///
    /// Returns true when a gravity step was performed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.running() {
            return false;
        }

        let Some(last) = self.last_drop_ms else {
            self.last_drop_ms = Some(now_ms);
            return false;
        };

        if now_ms.saturating_sub(last) <= u64::from(self.score.drop_interval_ms()) {
            return false;
        }

        self.last_drop_ms = Some(now_ms);
        self.fall(false);
        true
    }

    fn fall(&mut self, manual: bool) {
        if soft_drop(&self.board, &mut self.current) {
            self.emit(GameEvent::Fell { manual });
        } else {
            self.lock_current();
        }
    }

    /// Lock, clear, score and respawn as one step.
    fn lock_current(&mut self) {
        self.board.lock(&self.current);

        let rows = self.board.find_completed_rows();
        self.board.compact(&rows);
        let lines_cleared = rows.len();
        let points = self.score.record_clear(lines_cleared);
        self.emit(GameEvent::Locked {
            lines_cleared: lines_cleared as u32,
            points,
        });

        self.current = self.next;
        self.next = self.factory.spawn();

        if collides(&self.board, &self.current, 0, 0) {
            self.run_state = RunState::GameOver;
            let score = self.score.score();
            self.emit(GameEvent::GameOver { score });
        }
    }

    /// Dispatch a command; returns whether it was accepted.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::Rotate => self.rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
