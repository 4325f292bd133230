//! Transform module - collision tests, movement and rotation
//!
//! Every function takes the board by shared reference and only touches the
//! piece. A rejected move or rotation leaves the piece exactly as it was.
//!
//! # Wall kicks
//!
//! When a clockwise rotation collides in place, the rotated shape is shifted
//! sideways one column at a time. Pieces in the right half of the board
//! (`x > COLS/2`) are shifted left, all others right. Offsets of magnitude
//! `1..=width` (width of the rotated shape) are tried in order; the first legal
//! one wins.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::BOARD_WIDTH;

/// Check whether `piece` translated by (dx, dy) would overlap a wall, the
/// floor or a locked cell. Cells above the board never collide.
pub fn collides(board: &Board, piece: &Piece, dx: i8, dy: i8) -> bool {
    piece
        .board_cells()
        .any(|(x, y)| board.is_occupied(x + dx, y + dy))
}

/// Shift the piece one column left (`dir = -1`) or right (`dir = 1`).
/// Returns false and leaves the piece untouched if blocked.
pub fn try_move(board: &Board, piece: &mut Piece, dir: i8) -> bool {
    if collides(board, piece, dir, 0) {
        return false;
    }
    piece.x += dir;
    true
}

/// Move the piece one row down.
///
/// Returns true if it is still falling, false if it rests on something and
/// must be locked by the caller.
pub fn soft_drop(board: &Board, piece: &mut Piece) -> bool {
    if collides(board, piece, 0, 1) {
        return false;
    }
    piece.y += 1;
    true
}

/// Drop the piece to the lowest legal row; returns the number of rows travelled.
pub fn hard_drop(board: &Board, piece: &mut Piece) -> u32 {
    let mut cells = 0;
    while soft_drop(board, piece) {
        cells += 1;
    }
    cells
}

/// Rotate 90° clockwise, kicking off walls and stacks if needed.
///
/// Returns the horizontal kick that was applied, or `None` when no offset
/// resolves the collision (the piece is left unchanged).
pub fn rotate_clockwise(board: &Board, piece: &mut Piece) -> Option<i8> {
    let rotated = Piece {
        shape: piece.shape.rotated_cw(),
        ..*piece
    };

    let kick = find_kick(board, &rotated)?;
    *piece = Piece {
        x: rotated.x + kick,
        ..rotated
    };
    Some(kick)
}

fn find_kick(board: &Board, rotated: &Piece) -> Option<i8> {
    if !collides(board, rotated, 0, 0) {
        return Some(0);
    }

    let dir: i8 = if rotated.x > (BOARD_WIDTH / 2) as i8 {
        -1
    } else {
        1
    };
    let width = rotated.shape.width() as i8;

    (1..=width)
        .map(|magnitude| magnitude * dir)
        .find(|&offset| !collides(board, rotated, offset, 0))
}
