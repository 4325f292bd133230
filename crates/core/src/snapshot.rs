use crate::piece::Piece;
use crate::types::{Cell, RunState, BOARD_HEIGHT, BOARD_WIDTH};

/// Score sink view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreSnapshot {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

/// Render sink view: everything a frontend needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// None before the first start
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub score: ScoreSnapshot,
    pub drop_interval_ms: u32,
    pub run_state: RunState,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.run_state == RunState::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            score: ScoreSnapshot::default(),
            drop_interval_ms: 0,
            run_state: RunState::Idle,
        }
    }
}
