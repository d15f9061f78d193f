use crate::game_state::board::Board;
use crate::game_state::board_types::{Cell, PawnMove};

/// Plays `mv` in place: destination takes the source cell, source empties.
///
/// Legality is not validated; callers must only pass moves produced by
/// `generate_moves` or gated through `is_legal`.
#[inline]
pub fn apply_move(board: &mut Board, mv: PawnMove) {
    let piece = board.cell(mv.from);
    board.set_cell(mv.to, piece);
    board.set_cell(mv.from, None);
}

/// Undoes `mv`, restoring the destination to `captured`.
///
/// `captured` must be the destination's occupant read *before* `apply_move`
/// ran; apply overwrites it, so the caller is the only place it survives.
/// Every speculative apply must be paired with a revert before the next
/// evaluation begins, or the shared board is corrupted for the rest of the
/// selection pass.
#[inline]
pub fn revert_move(board: &mut Board, mv: PawnMove, captured: Cell) {
    let piece = board.cell(mv.to);
    board.set_cell(mv.from, piece);
    board.set_cell(mv.to, captured);
}

#[cfg(test)]
mod tests {
    use super::{apply_move, revert_move};
    use crate::game_state::board::Board;
    use crate::game_state::board_types::{PawnMove, Side};
    use crate::game_state::breakthrough_rules::STARTING_POSITION_DIGITS;
    use crate::move_generation::generate_moves::generate_moves;
    use crate::utils::encoding::DIGIT_ENCODING;

    #[test]
    fn apply_moves_the_piece_and_clears_the_source() {
        let mut board = Board::empty();
        board.set_cell((2, 2), Some(Side::Black));
        apply_move(&mut board, PawnMove::new((2, 2), (3, 2)));
        assert_eq!(board.cell((2, 2)), None);
        assert_eq!(board.cell((3, 2)), Some(Side::Black));
    }

    #[test]
    fn apply_then_revert_is_identity_for_every_legal_move() {
        let board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
        for side in [Side::Black, Side::White] {
            for mv in generate_moves(&board, side) {
                let mut scratch = board.clone();
                let captured = scratch.cell(mv.to);
                apply_move(&mut scratch, mv);
                revert_move(&mut scratch, mv, captured);
                assert_eq!(scratch, board);
            }
        }
    }

    #[test]
    fn revert_restores_a_captured_piece() {
        let mut board = Board::empty();
        board.set_cell((4, 4), Some(Side::White));
        board.set_cell((3, 3), Some(Side::Black));
        let before = board.clone();

        let mv = PawnMove::new((4, 4), (3, 3));
        let captured = board.cell(mv.to);
        apply_move(&mut board, mv);
        assert_eq!(board.cell((3, 3)), Some(Side::White));
        assert_eq!(board.cell((4, 4)), None);

        revert_move(&mut board, mv, captured);
        assert_eq!(board, before);
    }
}
