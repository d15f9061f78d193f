//! Game-level rules and constants shared by the CLI, harness, and tests.

use crate::game_state::board::Board;
use crate::game_state::board_types::Side;

/// The standard opening position in the digit encoding: Black fills rows 0-1,
/// White fills rows 6-7.
pub const STARTING_POSITION_DIGITS: &str =
    "1111111111111111................................0000000000000000";

/// Upper bound on turns before a game is declared drawn by the play loop.
pub const MAX_GAME_TURNS: u32 = 200;

/// Returns the winner, if either side has broken through.
///
/// Both sides are checked so a corrupted "double win" input still reports a
/// winner deterministically (Black first, matching scan order elsewhere).
pub fn winner_of(board: &Board) -> Option<Side> {
    if board.has_won(Side::Black) {
        Some(Side::Black)
    } else if board.has_won(Side::White) {
        Some(Side::White)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{winner_of, STARTING_POSITION_DIGITS};
    use crate::game_state::board::Board;
    use crate::game_state::board_types::Side;
    use crate::utils::encoding::DIGIT_ENCODING;

    #[test]
    fn starting_position_has_no_winner() {
        let board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
        assert_eq!(winner_of(&board), None);
    }

    #[test]
    fn winner_is_reported_after_breakthrough() {
        let mut board = Board::empty();
        board.set_cell((0, 5), Some(Side::White));
        assert_eq!(winner_of(&board), Some(Side::White));
    }
}
