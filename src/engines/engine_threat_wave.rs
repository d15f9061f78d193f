//! The flagship Threat Wave engine.
//!
//! A thin `Engine` wrapper around `search::threat_wave`: clones the shared
//! board into a scratch copy, runs the one-ply adversarial selection on it,
//! and maps the "no legal move" sentinel to `None`.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::search::threat_wave::choose_move;

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatWaveEngine;

impl ThreatWaveEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for ThreatWaveEngine {
    fn name(&self) -> &str {
        "Breakwave Threat Wave"
    }

    fn choose_move(&mut self, board: &Board, side: Side) -> Result<EngineOutput, String> {
        let mut scratch = board.clone();
        let chosen = choose_move(&mut scratch, side);

        let mut out = EngineOutput::default();
        if chosen.is_sentinel() {
            out.info_lines
                .push("info string threat_wave no legal moves".to_owned());
            return Ok(out);
        }

        out.best_move = Some(chosen);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::ThreatWaveEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::board::Board;
    use crate::game_state::board_types::Side;
    use crate::game_state::breakthrough_rules::STARTING_POSITION_DIGITS;
    use crate::move_generation::generate_moves::is_legal;
    use crate::utils::encoding::DIGIT_ENCODING;

    #[test]
    fn emits_a_legal_move_from_the_starting_position() {
        let board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
        let mut engine = ThreatWaveEngine::new();
        let out = engine
            .choose_move(&board, Side::Black)
            .expect("selection should succeed");
        let best = out.best_move.expect("a move should be found");
        assert!(is_legal(&board, Side::Black, best));
    }

    #[test]
    fn reports_none_when_stalemated() {
        let board = Board::empty();
        let mut engine = ThreatWaveEngine::new();
        let out = engine
            .choose_move(&board, Side::White)
            .expect("selection should succeed");
        assert!(out.best_move.is_none());
    }

    #[test]
    fn never_mutates_the_shared_board() {
        let board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
        let before = board.clone();
        let mut engine = ThreatWaveEngine::new();
        let _ = engine.choose_move(&board, Side::White);
        assert_eq!(board, before);
    }
}
