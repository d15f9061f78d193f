//! Threat Wave move selection.
//!
//! One-ply adversarial selection: each candidate move is scored by blending
//! its immediate tactical-pattern score with the simulated worst-case
//! opponent reply. There is deliberately no deeper search; lookahead stops
//! at the single reply ply.

use crate::game_state::board::Board;
use crate::game_state::board_types::{PawnMove, Side, NO_MOVE};
use crate::move_generation::generate_moves::generate_moves;
use crate::move_generation::move_apply::{apply_move, revert_move};
use crate::search::reply_simulation::worst_reply_score;
use crate::search::tactical_patterns::score_move;

/// Final score of a move that has already won the game. Larger than the
/// pattern scorer's promotion score so an achieved win always outranks a
/// merely imminent one.
pub const WINNING_MOVE_SCORE: i32 = 100000;

/// Percentage weights of the immediate pattern score and the post-reply
/// score in the blended final score.
pub const IMMEDIATE_WEIGHT: i32 = 60;
pub const REPLY_WEIGHT: i32 = 40;

/// Per-candidate scoring record, used only transiently during selection.
#[derive(Debug, Clone, Copy)]
pub struct MoveEvaluation {
    pub pawn_move: PawnMove,
    pub immediate_score: i32,
    pub reply_score: i32,
    pub final_score: i32,
}

/// Scores every candidate move for `side` in generation order.
///
/// The board is mutated and reverted per candidate and returns to its entry
/// state; evaluations never interleave.
pub fn evaluate_candidates(board: &mut Board, side: Side) -> Vec<MoveEvaluation> {
    let candidates = generate_moves(board, side);
    let mut evaluations = Vec::with_capacity(candidates.len());

    for pawn_move in candidates {
        let captured = board.cell(pawn_move.to);
        apply_move(board, pawn_move);

        let immediate_score = score_move(board, pawn_move, captured, side);

        let evaluation = if board.has_won(side) {
            MoveEvaluation {
                pawn_move,
                immediate_score: WINNING_MOVE_SCORE,
                reply_score: WINNING_MOVE_SCORE,
                final_score: WINNING_MOVE_SCORE,
            }
        } else {
            let reply_score = worst_reply_score(board, side);
            MoveEvaluation {
                pawn_move,
                immediate_score,
                reply_score,
                final_score: (immediate_score * IMMEDIATE_WEIGHT + reply_score * REPLY_WEIGHT)
                    / 100,
            }
        };

        revert_move(board, pawn_move, captured);
        evaluations.push(evaluation);
    }

    evaluations
}

/// Picks the move with the greatest final score, breaking ties by
/// generation order. Returns `NO_MOVE` when `side` has no legal move.
pub fn choose_move(board: &mut Board, side: Side) -> PawnMove {
    let evaluations = evaluate_candidates(board, side);

    let Some(mut best) = evaluations.first().copied() else {
        return NO_MOVE;
    };

    // Only a strict improvement replaces the incumbent, so the first
    // maximum seen wins ties.
    for evaluation in &evaluations[1..] {
        if evaluation.final_score > best.final_score {
            best = *evaluation;
        }
    }

    best.pawn_move
}
