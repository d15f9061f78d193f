//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::move_generation::generate_moves::generate_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Breakwave Random"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Result<EngineOutput, String> {
        let legal_moves = generate_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::board_types::Side;
    use crate::game_state::breakthrough_rules::STARTING_POSITION_DIGITS;
    use crate::move_generation::generate_moves::is_legal;
    use crate::utils::encoding::DIGIT_ENCODING;

    #[test]
    fn always_picks_a_legal_move() {
        let board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
        let mut engine = RandomEngine::new();
        for _ in 0..32 {
            let out = engine
                .choose_move(&board, Side::White)
                .expect("selection should succeed");
            let best = out.best_move.expect("a move should be found");
            assert!(is_legal(&board, Side::White, best));
        }
    }

    #[test]
    fn reports_none_without_legal_moves() {
        let board = Board::empty();
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&board, Side::Black)
            .expect("selection should succeed");
        assert!(out.best_move.is_none());
    }
}
