//! Runner configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | random | Seed of the piece generator |
//! | `BLOCKFALL_FRAME_MS` | 16 | Frame period of the tick loop |
//! | `BLOCKFALL_LOG_PATH` | unset | JSONL event log file (empty = off) |

use std::env;

pub const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub frame_ms: u64,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random);

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            frame_ms,
            log_path,
        }
    }
}
