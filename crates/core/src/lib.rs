//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds all game rules and state. It does no I/O and knows nothing
//! about terminals or timers, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: time is just a number passed to [`GameState::tick`]
//! - **Portable**: any frontend can drive it through commands and snapshots
//! - **Allocation-free** on the tick and command paths
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven base shapes and runtime clockwise rotation
//! - [`board`]: 10x20 grid with collision queries, locking and row compaction
//! - [`piece`]: the falling piece and the uniform random factory
//! - [`transform`]: movement, drops and rotation with wall kicks
//! - [`scoring`]: line-clear points, level and gravity speed
//! - [`game_state`]: the Idle/Running/Paused/GameOver state machine
//! - [`snapshot`]: read-only views for render and score sinks
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, RunState};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! assert_eq!(game.run_state(), RunState::Running);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] every frame with a monotonically increasing
//! timestamp in milliseconds. Gravity fires once the time since the last drop
//! exceeds the level's interval (1000ms at level 1, 100ms less per level,
//! never below 100ms).

pub mod board;
pub mod game_state;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod transform;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::{Piece, PieceFactory};
pub use scoring::{calculate_drop_score, calculate_line_score, ScoreState};
pub use shapes::{base_shape, ShapeMatrix};
pub use snapshot::{GameSnapshot, ScoreSnapshot};
pub use transform::{collides, hard_drop, rotate_clockwise, soft_drop, try_move};
