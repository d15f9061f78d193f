//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the play loop and diagnostics,
//! with file letters across the top and bottom and rank numbers on both
//! sides. Pieces render through the caller's encoding table.

use crate::game_state::board::Board;
use crate::utils::encoding::EncodingTable;

/// Render the board to a string for terminal output. Row 0 prints first,
/// labeled rank 8.
pub fn render_board(board: &Board, table: &EncodingTable) -> String {
    let mut out = String::new();

    out.push_str("  A B C D E F G H\n");

    for row in 0..8i8 {
        let rank = char::from(b'0' + (8 - row) as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8i8 {
            out.push(table.encode(board.cell((row, col))));
            out.push(' ');
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str("  A B C D E F G H");

    out
}
