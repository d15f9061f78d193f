//! Engine abstraction layer.
//!
//! Defines the common output payload so different move-selection strategies
//! can be swapped at runtime behind a single trait interface by the CLI and
//! the match harness.

use crate::game_state::board::Board;
use crate::game_state::board_types::{PawnMove, Side};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The selected move, or `None` when the side has no legal move.
    pub best_move: Option<PawnMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Selects a move for `side`. The shared board is never modified;
    /// engines that speculate clone it into a private scratch board first.
    fn choose_move(&mut self, board: &Board, side: Side) -> Result<EngineOutput, String>;
}
