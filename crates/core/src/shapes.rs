//! Shapes module - tetromino catalog and runtime rotation
//!
//! Only the spawn orientation of each piece is stored. Rotated orientations are
//! computed from it, so a shape's bounding box swaps width and height on every
//! quarter turn.

use crate::types::{ColorTag, PieceKind};

/// Largest bounding box side of any catalog shape
pub const MAX_SHAPE_SIDE: usize = 4;

/// Rectangular binary matrix describing the filled cells of a piece
/// relative to its local origin (top-left corner of the bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl ShapeMatrix {
    /// Build a matrix from 0/1 rows.
    ///
    /// Panics if the rows are empty, ragged or larger than 4x4; catalog
    /// shapes are all built at compile time.
    pub const fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        assert!(R > 0 && C > 0 && R <= MAX_SHAPE_SIDE && C <= MAX_SHAPE_SIDE);
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut y = 0;
        while y < R {
            let mut x = 0;
            while x < C {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Whether local cell (x, y) is filled; out-of-box cells are empty.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// Iterate the local (x, y) offsets of all filled cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Quarter turn clockwise: `new[i][j] = old[rows - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Self {
        let old_rows = self.rows as usize;
        let old_cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in cells.iter_mut().enumerate().take(old_cols) {
            for (j, cell) in row.iter_mut().enumerate().take(old_rows) {
                *cell = self.cells[old_rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

const I_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 1, 1]]);
const O_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1], [1, 1]]);
const T_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1]]);
const S_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1]]);
const J_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: ShapeMatrix = ShapeMatrix::from_rows([[0, 0, 1], [1, 1, 1]]);

/// Spawn orientation for a piece kind
pub fn base_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Catalog entry: base shape plus the color it locks with
pub fn catalog_entry(kind: PieceKind) -> (ShapeMatrix, ColorTag) {
    (base_shape(kind), kind.color())
}
