//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! plain framebuffer that is diffed and flushed to the terminal backend,
//! rather than going through a widget/layout library.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Only ever read game state through snapshots
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
