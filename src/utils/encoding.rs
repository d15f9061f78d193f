//! Board-string encodings.
//!
//! A board is exchanged as a 64-character row-major string. Two historical
//! character sets are in circulation (digits and glyphs), so the mapping is
//! a value passed to the initializer rather than a hardcoded table.

use crate::game_state::board::Board;
use crate::game_state::board_types::{Cell, Side};

/// Character-to-cell mapping for one encoding variant. `empty` is the
/// canonical character emitted for an empty square; on input, any character
/// other than `black` and `white` decodes to empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingTable {
    pub black: char,
    pub white: char,
    pub empty: char,
}

/// `'1'` Black, `'0'` White, `'.'` empty.
pub const DIGIT_ENCODING: EncodingTable = EncodingTable {
    black: '1',
    white: '0',
    empty: '.',
};

/// `'@'` Black, `'O'` White, `'.'` empty.
pub const GLYPH_ENCODING: EncodingTable = EncodingTable {
    black: '@',
    white: 'O',
    empty: '.',
};

impl EncodingTable {
    #[inline]
    pub fn decode(&self, ch: char) -> Cell {
        if ch == self.black {
            Some(Side::Black)
        } else if ch == self.white {
            Some(Side::White)
        } else {
            None
        }
    }

    #[inline]
    pub fn encode(&self, cell: Cell) -> char {
        match cell {
            Some(Side::Black) => self.black,
            Some(Side::White) => self.white,
            None => self.empty,
        }
    }
}

/// Length-validating wrapper around `Board::from_encoding` for untrusted
/// input. The core constructor itself trusts its caller.
pub fn parse_board(text: &str, table: &EncodingTable) -> Result<Board, String> {
    let length = text.chars().count();
    if length != 64 {
        return Err(format!(
            "Board encoding must be exactly 64 characters, got {length}"
        ));
    }
    Ok(Board::from_encoding(text, table))
}

/// Serializes a board back to its 64-character row-major form.
pub fn board_to_text(board: &Board, table: &EncodingTable) -> String {
    board
        .iter_cells()
        .map(|(_, cell)| table.encode(cell))
        .collect()
}
