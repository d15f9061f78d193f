//! One-ply greedy engine.
//!
//! Picks whichever move maximizes the static score immediately after it is
//! played, with no view of the opponent's reply. Used as a sparring partner
//! for the Threat Wave engine in the match harness.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::generate_moves::generate_moves;
use crate::move_generation::move_apply::{apply_move, revert_move};
use crate::search::board_scoring::evaluate;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Breakwave Greedy"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Result<EngineOutput, String> {
        let mut scratch = board.clone();
        let candidates = generate_moves(&scratch, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine candidates {}",
            candidates.len()
        ));

        let mut best = None;
        let mut best_score = i32::MIN;

        for pawn_move in candidates {
            let captured = scratch.cell(pawn_move.to);
            apply_move(&mut scratch, pawn_move);
            let score = evaluate(&scratch, side);
            revert_move(&mut scratch, pawn_move, captured);

            if score > best_score {
                best_score = score;
                best = Some(pawn_move);
            }
        }

        out.best_move = best;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::board_types::{PawnMove, Side};

    #[test]
    fn prefers_a_capture_over_a_quiet_advance() {
        let mut board = Board::empty();
        board.set_cell((4, 4), Some(Side::Black));
        board.set_cell((5, 5), Some(Side::White));
        let mut engine = GreedyEngine::new();
        let out = engine
            .choose_move(&board, Side::Black)
            .expect("selection should succeed");
        assert_eq!(out.best_move, Some(PawnMove::new((4, 4), (5, 5))));
    }

    #[test]
    fn reports_none_without_legal_moves() {
        let board = Board::empty();
        let mut engine = GreedyEngine::new();
        let out = engine
            .choose_move(&board, Side::Black)
            .expect("selection should succeed");
        assert!(out.best_move.is_none());
    }
}
