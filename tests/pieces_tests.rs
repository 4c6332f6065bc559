//! Piece tests - shape table, rotation and collision

use tetrion::core::{collides, shape_of, Board, Piece};
use tetrion::types::PieceKind;

fn cells(piece: &Piece) -> Vec<(i8, i8)> {
    let mut v: Vec<_> = piece.cells().collect();
    v.sort();
    v
}

#[test]
fn test_shape_sizes() {
    assert_eq!(shape_of(PieceKind::I).size(), 4);
    assert_eq!(shape_of(PieceKind::O).size(), 2);
    for kind in [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ] {
        assert_eq!(shape_of(kind).size(), 3, "{:?}", kind);
    }
}

#[test]
fn test_spawn_cells() {
    assert_eq!(
        cells(&Piece::spawn(PieceKind::T)),
        vec![(4, 1), (5, 0), (5, 1), (6, 1)]
    );
    assert_eq!(
        cells(&Piece::spawn(PieceKind::I)),
        vec![(3, 1), (4, 1), (5, 1), (6, 1)]
    );
    assert_eq!(
        cells(&Piece::spawn(PieceKind::O)),
        vec![(4, 0), (4, 1), (5, 0), (5, 1)]
    );
}

#[test]
fn test_rotation_cycle_for_every_kind() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let mut r = piece;
        for _ in 0..4 {
            r = r.rotated();
            assert_eq!((r.x, r.y), (piece.x, piece.y));
        }
        assert_eq!(r, piece, "{:?}", kind);
    }
}

#[test]
fn test_s_rotation() {
    let rotated = Piece::spawn(PieceKind::S).rotated();
    let rows: Vec<Vec<u8>> = rotated.shape.rows().map(<[u8]>::to_vec).collect();
    assert_eq!(rows, vec![vec![0, 4, 0], vec![0, 4, 4], vec![0, 0, 4]]);
}

#[test]
fn test_rotation_against_wall_is_rejected() {
    let board = Board::new();
    // Vertical I hugging the left wall: its cells sit in matrix column 2.
    let vertical = Piece {
        x: -2,
        ..Piece::spawn(PieceKind::I).rotated()
    };
    assert!(!collides(&board, &vertical));

    // Rotating back to horizontal would put cells at x = -2 and -1.
    assert!(collides(&board, &vertical.rotated()));
}

#[test]
fn test_piece_above_board_only_hits_walls() {
    let board = Board::from_rows(&["IIIIIIIIII"; 20]);
    let above = Piece {
        y: -4,
        ..Piece::spawn(PieceKind::L)
    };
    assert!(!collides(&board, &above));
    assert!(collides(&board, &Piece { x: -1, ..above }));
}
