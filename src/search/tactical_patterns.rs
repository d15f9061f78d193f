//! Hand-tuned tactical scoring of a single candidate move.
//!
//! Scores the move on the board *after* it has been tentatively applied,
//! with the pre-move destination occupant passed in by the caller (apply
//! overwrites it, so only the caller can still see a capture). The weights
//! are fixed integers and part of the engine's external contract.

use crate::game_state::board::Board;
use crate::game_state::board_types::{offset_location, Cell, PawnMove, Side};

/// Returned outright when the move lands on the victory row; dominates every
/// accumulated pattern term.
pub const PROMOTION_SCORE: i32 = 50000;
pub const NEAR_PROMOTION_BONUS: i32 = 5000;
pub const CAPTURE_BONUS: i32 = 800;
pub const CAPTURE_ADVANCEMENT_WEIGHT: i32 = 50;
pub const ADVANCE_WEIGHT: i32 = 200;
pub const CENTER_BONUS: i32 = 100;
pub const PROTECTION_BONUS: i32 = 80;
pub const THREAT_ROW_WEIGHT: i32 = 150;
pub const SELF_BLOCK_PENALTY: i32 = 200;

/// Scores `mv` for `side` on the post-move `board`.
///
/// `captured` is the destination's occupant before the move was applied.
pub fn score_move(board: &Board, mv: PawnMove, captured: Cell, side: Side) -> i32 {
    let mut score = 0;
    let enemy = side.opposite();
    let step = side.forward_step();
    let victory_row = side.victory_row();

    // Reaching the goal always wins move selection.
    if mv.to.0 == victory_row {
        return PROMOTION_SCORE;
    }
    if mv.to.0 == victory_row - step {
        score += NEAR_PROMOTION_BONUS;
    }

    // Capture bonus scales with how far the victim had already advanced.
    if captured == Some(enemy) {
        score += CAPTURE_BONUS;
        score += CAPTURE_ADVANCEMENT_WEIGHT * enemy.advancement(mv.to.0);
    }

    // Net advancement change. Always >= 0 for the forward-only move set,
    // but computed generally.
    score += ADVANCE_WEIGHT * (side.advancement(mv.to.0) - side.advancement(mv.from.0));

    // Center files C-F.
    if (2..=5).contains(&mv.to.1) {
        score += CENTER_BONUS;
    }

    // Back-diagonal protection behind the destination.
    for d_col in [-1, 1] {
        if let Ok(guard) = offset_location(mv.to, -step, d_col) {
            if board.cell(guard) == Some(side) {
                score += PROTECTION_BONUS;
            }
        }
    }

    // Clustered threats: count every own piece across the threat row,
    // the moved piece included.
    if mv.to.0 == side.threat_row() {
        let threats = (0..8)
            .filter(|&col| board.cell((mv.to.0, col)) == Some(side))
            .count() as i32;
        score += THREAT_ROW_WEIGHT * threats;
    }

    // Walking up behind an own piece blocks it.
    if let Ok(ahead) = offset_location(mv.to, step, 0) {
        if board.cell(ahead) == Some(side) {
            score -= SELF_BLOCK_PENALTY;
        }
    }

    score
}
