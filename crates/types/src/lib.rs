//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! types flow through the game core, the terminal frontend and the event log.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! Pieces may hang above row 0 while spawning; those cells are never written
//! into the board.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let command = Command::from_str("hardDrop").unwrap();
//! assert_eq!(command, Command::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// How much faster gravity gets with every level
pub const DROP_STEP_MS: u32 = 100;

/// Absolute minimum drop interval (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per simultaneous line clear, indexed by the number of rows (0-4).
/// Multiplied by the level in effect before the clear.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per manual soft-drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Color tag written into the board when a piece of this kind locks.
    pub fn color(&self) -> ColorTag {
        match self {
            PieceKind::I => ColorTag::from_hex(0x00f0f0),
            PieceKind::O => ColorTag::from_hex(0xf0f000),
            PieceKind::T => ColorTag::from_hex(0xa000f0),
            PieceKind::S => ColorTag::from_hex(0x00f000),
            PieceKind::Z => ColorTag::from_hex(0xf00000),
            PieceKind::J => ColorTag::from_hex(0x0000f0),
            PieceKind::L => ColorTag::from_hex(0xf0a000),
        }
    }
}

/// 24-bit RGB color carried by occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTag {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTag {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Cell on the board (None = empty, Some = occupied with a color)
pub type Cell = Option<ColorTag>;

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    /// Before the first start
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::GameOver => "gameOver",
        }
    }
}

/// Commands accepted by the game state machine.
///
/// Frontends translate their input events into these. A command issued in a
/// state that does not allow it is ignored, except `Start` which always
/// (re)starts the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
    MoveLeft,
    MoveRight,
    /// Step the piece one row down (+1 point)
    SoftDrop,
    /// Drop to the lowest legal row and lock (+2 points per row)
    HardDrop,
    /// Rotate 90° clockwise with wall kicks
    Rotate,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "togglepause" => Some(Command::TogglePause),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::TogglePause => "togglePause",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Rotate => "rotate",
        }
    }
}

/// State change reported by the game after an accepted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Moved { dx: i8 },
    Rotated { kick: i8 },
    /// One row down, either from gravity or a manual soft drop
    Fell { manual: bool },
    HardDropped { cells: u32 },
    /// The current piece was written into the board
    Locked { lines_cleared: u32, points: u32 },
    Paused,
    Resumed,
    GameOver { score: u32 },
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Started => "started",
            GameEvent::Moved { .. } => "moved",
            GameEvent::Rotated { .. } => "rotated",
            GameEvent::Fell { .. } => "fell",
            GameEvent::HardDropped { .. } => "hardDropped",
            GameEvent::Locked { .. } => "locked",
            GameEvent::Paused => "paused",
            GameEvent::Resumed => "resumed",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }
}
