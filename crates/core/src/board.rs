//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that locked there. Storage is a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one line clear
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Write the piece's kind into every occupied cell it covers.
    ///
    /// Cells above the top edge (negative rows) are dropped. Legality is the
    /// caller's job: this overwrites whatever is underneath.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.kind));
            }
        }
    }

    /// Clear all full rows and return how many were removed
    pub fn clear_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Clear all full rows and return their indices (bottom to top)
    ///
    /// Surviving rows keep their relative order and are compacted toward the
    /// bottom; the vacated rows at the top are emptied. A single bottom-up
    /// pass with a separate write cursor handles any mix of full and
    /// non-full rows, including rows that slide into a cleared slot.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(None);

        cleared_rows
    }

    /// Export as a `u8` grid: 0 for empty, the kind's type id otherwise
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[y * WIDTH + x].map_or(0, |kind| kind.id());
            }
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, top to bottom
    ///
    /// `.` is empty; a piece letter fills the cell with that kind. Missing
    /// leading rows are empty, so a test only needs to spell out the bottom
    /// of the stack.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, row) in rows.iter().take(HEIGHT).enumerate() {
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                let cell = crate::types::PieceKind::from_str(&ch.to_string());
                board.cells[(offset + i) * WIDTH + x] = cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_merge_writes_kind() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::T).shifted(0, 5);
        board.merge(&piece);

        assert_eq!(board.get(5, 5), Some(Some(PieceKind::T)));
        assert_eq!(board.get(4, 6), Some(Some(PieceKind::T)));
        assert_eq!(board.get(5, 6), Some(Some(PieceKind::T)));
        assert_eq!(board.get(6, 6), Some(Some(PieceKind::T)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
    }

    #[test]
    fn test_merge_skips_rows_above_board() {
        let mut board = Board::new();
        // T at y=-1: top cell at row -1, bottom row at 0.
        let piece = Piece::spawn(PieceKind::T).shifted(0, -1);
        board.merge(&piece);

        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 3);
        assert!(board.is_occupied(4, 0));
        assert!(board.is_occupied(6, 0));
    }

    #[test]
    fn test_from_rows_pads_top() {
        let board = Board::from_rows(&["I.........", "OOOOOOOOOO"]);
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::I)));
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));
        assert_eq!(board.get(0, 0), Some(None));
    }

    #[test]
    fn test_write_u8_grid_uses_type_ids() {
        let board = Board::from_rows(&["IOTSZJL..."]);
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19], [1, 2, 3, 4, 5, 6, 7, 0, 0, 0]);
        assert!(grid[..19].iter().all(|row| row.iter().all(|&v| v == 0)));
    }
}
