//! Pieces module - tetromino shape matrices and rotation
//!
//! Every kind has a canonical square matrix. Occupied entries hold the kind's
//! type identifier and empty entries hold 0. The canonical table is `const`
//! data; rotating produces a new [`Shape`] value and never touches the table.

use serde::{Serialize, Serializer};

use crate::types::{PieceKind, BOARD_WIDTH, MAX_SHAPE_SIZE};

type Matrix = [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

/// Square shape matrix of side 2, 3 or 4 stored in a fixed 4x4 array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: Matrix,
}

impl Shape {
    const fn new(size: u8, cells: Matrix) -> Self {
        Self { size, cells }
    }

    /// Side length of the matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell value at (row, col); 0 outside the matrix
    pub fn get(&self, row: usize, col: usize) -> u8 {
        let n = self.size as usize;
        if row >= n || col >= n {
            return 0;
        }
        self.cells[row][col]
    }

    /// Matrix rows, each `size()` long
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let n = self.size as usize;
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// (dx, dy) offsets of occupied cells, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }

    /// Clockwise rotation: transpose, then reverse each row.
    ///
    /// `rotated[r][c] = self[n - 1 - c][r]`
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

const SHAPES: [Shape; PieceKind::COUNT] = [
    // I
    Shape::new(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // O
    Shape::new(2, [[2, 2, 0, 0], [2, 2, 0, 0], [0; 4], [0; 4]]),
    // T
    Shape::new(3, [[0, 3, 0, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0; 4]]),
    // S
    Shape::new(3, [[0, 4, 4, 0], [4, 4, 0, 0], [0, 0, 0, 0], [0; 4]]),
    // Z
    Shape::new(3, [[5, 5, 0, 0], [0, 5, 5, 0], [0, 0, 0, 0], [0; 4]]),
    // J
    Shape::new(3, [[6, 0, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0; 4]]),
    // L
    Shape::new(3, [[0, 0, 7, 0], [7, 7, 7, 0], [0, 0, 0, 0], [0; 4]]),
];

/// Canonical (spawn orientation) shape for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    SHAPES[kind.index()]
}

/// Spawn column: horizontally centered on the board
pub fn spawn_column(kind: PieceKind) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape_of(kind).size() / 2) as i8
}

/// A tetromino placed on the board
///
/// `x`/`y` anchor the top-left corner of the shape matrix. `y` may be
/// negative while a piece is still entering from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece at its spawn position (centered, row 0)
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: spawn_column(kind),
            y: 0,
        }
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece rotated clockwise in place
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_cells_hold_type_id() {
        for kind in PieceKind::ALL {
            let shape = shape_of(kind);
            assert_eq!(shape.occupied().count(), 4, "{:?}", kind);
            for row in shape.rows() {
                for &v in row {
                    assert!(v == 0 || v == kind.id());
                }
            }
        }
    }

    #[test]
    fn test_spawn_columns() {
        assert_eq!(spawn_column(PieceKind::I), 3);
        assert_eq!(spawn_column(PieceKind::O), 4);
        assert_eq!(spawn_column(PieceKind::T), 4);
        assert_eq!(spawn_column(PieceKind::L), 4);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let rotated = shape_of(PieceKind::T).rotated_cw();
        let rows: Vec<Vec<u8>> = rotated.rows().map(<[u8]>::to_vec).collect();
        assert_eq!(rows, vec![vec![0, 3, 0], vec![0, 3, 3], vec![0, 3, 0]]);
    }

    #[test]
    fn test_rotate_i_is_vertical() {
        let rotated = shape_of(PieceKind::I).rotated_cw();
        let cells: Vec<_> = rotated.occupied().collect();
        assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_four_rotations_restore_shape() {
        for kind in PieceKind::ALL {
            let shape = shape_of(kind);
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_o_is_rotation_fixed_point() {
        let o = shape_of(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn test_rotated_piece_leaves_source_alone() {
        let piece = Piece::spawn(PieceKind::J);
        let rotated = piece.rotated();
        assert_eq!(piece.shape, shape_of(PieceKind::J));
        assert_ne!(rotated.shape, piece.shape);
        assert_eq!((rotated.x, rotated.y, rotated.kind), (piece.x, piece.y, piece.kind));
    }

    #[test]
    fn test_shape_serializes_as_rows() {
        let json = serde_json::to_string(&shape_of(PieceKind::O)).unwrap();
        assert_eq!(json, "[[2,2],[2,2]]");
    }
}
