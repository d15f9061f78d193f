//! Static position scoring.
//!
//! The evaluator is a linear material-plus-advancement function used to
//! assess simulated positions. It is intentionally unbounded and ignores
//! file structure beyond per-square advancement.

use crate::game_state::board::Board;
use crate::game_state::board_types::Side;

/// Sentinel for an already-decided position. Dominates every material and
/// advancement contribution so decided positions outrank undecided ones.
pub const WIN_SCORE: i32 = 10000;

pub const PIECE_WEIGHT: i32 = 100;
pub const ADVANCEMENT_WEIGHT: i32 = 10;

/// Scores `board` from the perspective of `side`.
///
/// Returns `WIN_SCORE` / `-WIN_SCORE` when either side has already broken
/// through; otherwise a weighted blend of the piece-count difference and the
/// total-advancement difference, summed per piece.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let enemy = side.opposite();

    if board.has_won(side) {
        return WIN_SCORE;
    }
    if board.has_won(enemy) {
        return -WIN_SCORE;
    }

    let mut own_pieces = 0;
    let mut enemy_pieces = 0;
    let mut own_advancement = 0;
    let mut enemy_advancement = 0;

    for ((row, _), cell) in board.iter_cells() {
        if cell == Some(side) {
            own_pieces += 1;
            own_advancement += side.advancement(row);
        } else if cell == Some(enemy) {
            enemy_pieces += 1;
            enemy_advancement += enemy.advancement(row);
        }
    }

    (own_pieces - enemy_pieces) * PIECE_WEIGHT
        + (own_advancement - enemy_advancement) * ADVANCEMENT_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::{evaluate, WIN_SCORE};
    use crate::game_state::board::Board;
    use crate::game_state::board_types::Side;
    use crate::game_state::breakthrough_rules::STARTING_POSITION_DIGITS;
    use crate::utils::encoding::DIGIT_ENCODING;

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
        assert_eq!(evaluate(&board, Side::Black), 0);
        assert_eq!(evaluate(&board, Side::White), 0);
    }

    #[test]
    fn win_sentinels_dominate_material() {
        // Black has broken through while badly outnumbered.
        let mut board = Board::empty();
        board.set_cell((7, 0), Some(Side::Black));
        for col in 0..8 {
            board.set_cell((6, col), Some(Side::White));
        }
        assert_eq!(evaluate(&board, Side::Black), WIN_SCORE);
        assert_eq!(evaluate(&board, Side::White), -WIN_SCORE);
    }

    #[test]
    fn material_and_advancement_are_weighted_100_and_10() {
        let mut board = Board::empty();
        board.set_cell((2, 0), Some(Side::Black));
        board.set_cell((5, 3), Some(Side::Black));
        board.set_cell((6, 6), Some(Side::White));
        // Black: 2 pieces, advancement 2 + 5 = 7. White: 1 piece, advancement 1.
        assert_eq!(evaluate(&board, Side::Black), 100 * (2 - 1) + 10 * (7 - 1));
        assert_eq!(evaluate(&board, Side::White), 100 * (1 - 2) + 10 * (1 - 7));
    }
}
