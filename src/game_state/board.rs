//! Board state representation.
//!
//! `Board` is the central model for the engine: a plain 8x8 grid of cells
//! mutated in place by real play and by speculative apply/revert cycles
//! during move selection.

use crate::game_state::board_types::{BoardLocation, Cell, Side};
use crate::utils::encoding::EncodingTable;

/// Fixed 8x8 grid of cells, row-major with row 0 nearest Black's start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// An empty board.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Populates a board row-major from a 64-character encoding, mapping
    /// each character through `table`. Unrecognized characters become empty
    /// squares. The input is trusted: length validation belongs to the
    /// caller (see `utils::encoding::parse_board`).
    pub fn from_encoding(text: &str, table: &EncodingTable) -> Self {
        let mut board = Self::empty();
        for (index, ch) in text.chars().take(64).enumerate() {
            let row = (index / 8) as i8;
            let col = (index % 8) as i8;
            board.set_cell((row, col), table.decode(ch));
        }
        board
    }

    #[inline]
    pub fn cell(&self, x: BoardLocation) -> Cell {
        self.cells[x.0 as usize][x.1 as usize]
    }

    #[inline]
    pub fn set_cell(&mut self, x: BoardLocation, value: Cell) {
        self.cells[x.0 as usize][x.1 as usize] = value;
    }

    /// True iff any of `side`'s pieces stands on its victory row.
    pub fn has_won(&self, side: Side) -> bool {
        let victory_row = side.victory_row();
        (0..8).any(|col| self.cell((victory_row, col)) == Some(side))
    }

    /// Iterates every (location, cell) pair in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (BoardLocation, Cell)> + '_ {
        (0..8i8).flat_map(move |row| (0..8i8).map(move |col| ((row, col), self.cell((row, col)))))
    }
}
