//! One-ply opponent reply simulation.
//!
//! For a hypothetical position, plays every opponent reply on the shared
//! board and returns the worst resulting static score for us, i.e. the
//! opponent's best response. Every reply is examined; any of them could be
//! the true minimum, so there is no pruning.

use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::generate_moves::generate_moves;
use crate::move_generation::move_apply::{apply_move, revert_move};
use crate::search::board_scoring::{evaluate, WIN_SCORE};

/// Scores the opponent's best reply from `side`'s perspective.
///
/// A stalemated opponent scores `WIN_SCORE`, the same as a win. Each reply
/// is applied and reverted on the caller's board; the board is returned to
/// its entry state before this function returns.
pub fn worst_reply_score(board: &mut Board, side: Side) -> i32 {
    let replies = generate_moves(board, side.opposite());

    if replies.is_empty() {
        return WIN_SCORE;
    }

    let mut worst = i32::MAX;

    for reply in replies {
        let captured = board.cell(reply.to);
        apply_move(board, reply);
        let score = evaluate(board, side);
        revert_move(board, reply, captured);

        if score < worst {
            worst = score;
        }
    }

    worst
}

#[cfg(test)]
mod tests {
    use super::worst_reply_score;
    use crate::game_state::board::Board;
    use crate::game_state::board_types::Side;
    use crate::search::board_scoring::{evaluate, WIN_SCORE};

    #[test]
    fn stalemated_opponent_scores_as_a_win() {
        // A lone White piece on row 0 has no forward square left.
        let mut board = Board::empty();
        board.set_cell((0, 0), Some(Side::White));
        board.set_cell((3, 3), Some(Side::Black));
        assert_eq!(worst_reply_score(&mut board, Side::Black), WIN_SCORE);
    }

    #[test]
    fn opponent_with_no_pieces_scores_as_a_win() {
        let mut board = Board::empty();
        board.set_cell((3, 3), Some(Side::Black));
        assert_eq!(worst_reply_score(&mut board, Side::Black), WIN_SCORE);
    }

    #[test]
    fn the_minimum_over_all_replies_is_returned() {
        // White can quietly advance or capture the Black pawn; the capture
        // is its best reply and therefore our worst score.
        let mut board = Board::empty();
        board.set_cell((4, 4), Some(Side::Black));
        board.set_cell((5, 5), Some(Side::White));
        let score = worst_reply_score(&mut board, Side::Black);
        // After the capture: no Black pieces, one White piece at (4,4).
        assert_eq!(score, 100 * (0 - 1) + 10 * (0 - 3));
    }

    #[test]
    fn the_board_is_unchanged_after_simulation() {
        let mut board = Board::empty();
        board.set_cell((4, 4), Some(Side::Black));
        board.set_cell((5, 5), Some(Side::White));
        board.set_cell((2, 1), Some(Side::White));
        let before = board.clone();
        let _ = worst_reply_score(&mut board, Side::Black);
        assert_eq!(board, before);
        // The static score is likewise untouched by the simulation pass.
        assert_eq!(evaluate(&board, Side::Black), evaluate(&before, Side::Black));
    }
}
