//! Legal move enumeration.
//!
//! Scans the board row-major and evaluates the three forward candidates per
//! piece in a fixed order, so the returned sequence is deterministic and
//! reproducible for a given board and side. Deterministic ordering is what
//! makes the selector's first-seen tie-break stable.

use crate::game_state::board::Board;
use crate::game_state::board_types::{offset_location, PawnMove, Side};

/// Enumerates every legal move for `side`.
///
/// Candidate order per piece: straight forward, forward-left diagonal,
/// forward-right diagonal. Straight moves require an empty destination;
/// diagonals may also capture an enemy piece. Off-board candidates are
/// silently skipped. The list is rebuilt fresh on every call.
pub fn generate_moves(board: &Board, side: Side) -> Vec<PawnMove> {
    let mut moves = Vec::new();
    let step = side.forward_step();

    for row in 0..8i8 {
        for col in 0..8i8 {
            if board.cell((row, col)) != Some(side) {
                continue;
            }

            let deltas: [(i8, i8); 3] = [(step, 0), (step, -1), (step, 1)];

            for (k, (d_row, d_col)) in deltas.iter().enumerate() {
                let Ok(dest) = offset_location((row, col), *d_row, *d_col) else {
                    continue;
                };

                match board.cell(dest) {
                    None => {}
                    Some(occupant) => {
                        // Straight moves never capture.
                        if k == 0 {
                            continue;
                        }
                        if occupant == side {
                            continue;
                        }
                    }
                }

                moves.push(PawnMove::new((row, col), dest));
            }
        }
    }

    moves
}

/// Membership test against `generate_moves`, used to validate externally
/// supplied moves. No separate legality algorithm exists.
pub fn is_legal(board: &Board, side: Side, candidate: PawnMove) -> bool {
    generate_moves(board, side).contains(&candidate)
}
