//! Piece module - the falling piece and the factory that spawns it
//!
//! Piece kinds are drawn independently and uniformly (with replacement) from
//! the seven catalog entries. The factory is generic over any `rand::Rng`;
//! the game uses a seeded `StdRng` so that runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::{catalog_entry, ShapeMatrix};
use crate::types::{ColorTag, PieceKind, BOARD_WIDTH};

/// A piece on (or just above) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: ColorTag,
    /// Column of the shape's local origin
    pub x: i8,
    /// Row of the shape's local origin; negative while above the grid
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let (shape, color) = catalog_entry(kind);
        Self {
            kind,
            shape,
            color,
            x: spawn_column(&shape),
            y: 0,
        }
    }

    /// Board coordinates of every filled cell
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Column that centers a shape on the board: `COLS/2 - width/2`
pub fn spawn_column(shape: &ShapeMatrix) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// Uniform random piece generator
#[derive(Debug, Clone)]
pub struct PieceFactory<R = StdRng> {
    rng: R,
}

impl PieceFactory<StdRng> {
    /// Create a factory with a reproducible seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceFactory<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a kind uniformly from the catalog
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Spawn a fresh piece centered at the top of the board
    pub fn spawn(&mut self) -> Piece {
        Piece::new(self.next_kind())
    }
}

impl Default for PieceFactory<StdRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
