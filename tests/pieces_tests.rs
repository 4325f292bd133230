//! Shape catalog, spawning and transform tests

use blockfall::core::piece::spawn_column;
use blockfall::core::{
    base_shape, collides, hard_drop, rotate_clockwise, soft_drop, try_move, Board, Piece,
    PieceFactory,
};
use blockfall::types::{ColorTag, PieceKind, BOARD_WIDTH};

#[test]
fn test_every_shape_has_four_cells() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        assert_eq!(shape.cells().count(), 4, "{kind:?}");
        assert_eq!(shape.rotated_cw().cells().count(), 4, "{kind:?}");
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        let turned = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(turned, shape, "{kind:?}");
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    let i = base_shape(PieceKind::I);
    assert_eq!((i.width(), i.height()), (4, 1));
    let r = i.rotated_cw();
    assert_eq!((r.width(), r.height()), (1, 4));
}

#[test]
fn test_spawn_is_centered_at_top() {
    assert_eq!(Piece::new(PieceKind::I).x, 3);
    assert_eq!(Piece::new(PieceKind::O).x, 4);
    assert_eq!(Piece::new(PieceKind::T).x, 4);
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.x, spawn_column(&piece.shape));
        assert_eq!(piece.color, kind.color());
    }
}

#[test]
fn test_spawn_never_collides_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(!collides(&board, &Piece::new(kind), 0, 0), "{kind:?}");
    }
}

#[test]
fn test_factory_is_reproducible() {
    let mut a = PieceFactory::seeded(99);
    let mut b = PieceFactory::seeded(99);
    for _ in 0..50 {
        assert_eq!(a.next_kind(), b.next_kind());
    }
}

#[test]
fn test_factory_draws_every_kind() {
    let mut factory = PieceFactory::seeded(7);
    let mut seen = [false; 7];
    for _ in 0..1000 {
        let kind = factory.next_kind();
        let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
        seen[idx] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_move_stops_at_walls() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::O);

    while try_move(&board, &mut piece, -1) {}
    assert_eq!(piece.x, 0);

    while try_move(&board, &mut piece, 1) {}
    assert_eq!(piece.x, BOARD_WIDTH as i8 - 2);
}

#[test]
fn test_soft_drop_rests_on_stack() {
    let mut board = Board::new();
    board.set(4, 10, Some(ColorTag::new(1, 1, 1)));
    let mut piece = Piece::new(PieceKind::O);

    let mut rows = 0;
    while soft_drop(&board, &mut piece) {
        rows += 1;
    }
    // O covers rows y..y+1; it stops with its bottom on row 9.
    assert_eq!(rows, 8);
    assert_eq!(piece.y, 8);
    assert!(collides(&board, &piece, 0, 1));
}

#[test]
fn test_hard_drop_counts_rows() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I);
    assert_eq!(hard_drop(&board, &mut piece), 19);
    assert_eq!(piece.y, 19);
}

#[test]
fn test_rotation_in_open_space_needs_no_kick() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::T);
    piece.y = 5;
    assert_eq!(rotate_clockwise(&board, &mut piece), Some(0));
    assert_eq!(piece.shape, base_shape(PieceKind::T).rotated_cw());
}

#[test]
fn test_vertical_i_kicks_off_right_wall() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I);
    assert_eq!(rotate_clockwise(&board, &mut piece), Some(0));
    while try_move(&board, &mut piece, 1) {}
    assert_eq!(piece.x, 9);

    assert_eq!(rotate_clockwise(&board, &mut piece), Some(-3));
    assert_eq!(piece.x, 6);
    assert_eq!(piece.shape.width(), 4);
}

#[test]
fn test_vertical_i_turns_flat_against_left_wall() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I);
    piece.shape = piece.shape.rotated_cw().rotated_cw().rotated_cw();
    while try_move(&board, &mut piece, -1) {}
    assert_eq!(piece.x, 0);

    // Already fits at the left wall; no kick needed.
    assert_eq!(rotate_clockwise(&board, &mut piece), Some(0));
    assert_eq!(piece.x, 0);
}

#[test]
fn test_blocked_rotation_leaves_piece_unchanged() {
    let mut board = Board::new();
    let gray = Some(ColorTag::new(1, 1, 1));
    // A vertical I in a one-wide well cannot turn flat.
    for y in 0..20 {
        for x in 0..BOARD_WIDTH as i8 {
            if x != 4 {
                board.set(x, y, gray);
            }
        }
    }
    let mut piece = Piece::new(PieceKind::I);
    piece.shape = piece.shape.rotated_cw();
    piece.x = 4;
    piece.y = 10;
    let before = piece;

    assert_eq!(rotate_clockwise(&board, &mut piece), None);
    assert_eq!(piece, before);
}
