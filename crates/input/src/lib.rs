//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. It keeps no
//! state: holding a key relies on the terminal's own auto-repeat.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, should_quit};
