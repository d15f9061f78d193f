//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without console
//! I/O, with an optional seeded random opening prefix so repeated series
//! explore different middlegames deterministically.

use chrono::Local;
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::board_types::Side;
use crate::game_state::breakthrough_rules::{winner_of, STARTING_POSITION_DIGITS};
use crate::move_generation::generate_moves::{generate_moves, is_legal};
use crate::move_generation::move_apply::apply_move;
use crate::utils::coordinates::move_to_text;
use crate::utils::encoding::DIGIT_ENCODING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    BlackWinBreakthrough,
    WhiteWinBreakthrough,
    /// The side to move had no legal move.
    DrawStalled,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Number of seeded random plies played before the engines take over.
    pub opening_plies: u8,
    /// Side that moves first. White by convention, as in the console game.
    pub first_to_move: Side,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 4,
            first_to_move: Side::White,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub plies: u32,
    pub black_engine: String,
    pub white_engine: String,
    /// Wall-clock start of the game, for match records.
    pub started_at: String,
}

/// Play a single seeded engine-vs-engine game from the standard opening
/// position. The harness validates every engine move through `is_legal`
/// before applying it, so an engine defect surfaces as an error rather
/// than a corrupted game.
pub fn play_match<'a>(
    engine_black: &'a mut dyn Engine,
    engine_white: &'a mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_black.new_game();
    engine_white.new_game();

    let started_at = Local::now().format("%Y.%m.%d %H:%M:%S").to_string();
    let mut board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
    let mut side = config.first_to_move;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::new();

    for _ in 0..config.opening_plies {
        let candidates = generate_moves(&board, side);
        let Some(picked) = candidates.as_slice().choose(&mut rng) else {
            break;
        };
        apply_move(&mut board, *picked);
        opening_moves.push(move_to_text(*picked));
        side = side.opposite();
    }

    let mut played_moves = Vec::new();
    let mut plies = opening_moves.len() as u32;
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for _ in 0..config.max_plies {
        if let Some(winner) = winner_of(&board) {
            outcome = win_outcome(winner);
            break;
        }

        let engine = match side {
            Side::Black => &mut *engine_black,
            Side::White => &mut *engine_white,
        };

        let Some(best) = engine.choose_move(&board, side)?.best_move else {
            outcome = MatchOutcome::DrawStalled;
            break;
        };

        if !is_legal(&board, side, best) {
            return Err(format!(
                "{} produced the illegal move {}",
                engine.name(),
                move_to_text(best)
            ));
        }

        apply_move(&mut board, best);
        played_moves.push(move_to_text(best));
        plies += 1;
        side = side.opposite();
    }

    if outcome == MatchOutcome::DrawMaxPlies {
        if let Some(winner) = winner_of(&board) {
            outcome = win_outcome(winner);
        }
    }

    Ok(MatchResult {
        outcome,
        final_board: board,
        opening_moves,
        played_moves,
        plies,
        black_engine: engine_black.name().to_owned(),
        white_engine: engine_white.name().to_owned(),
        started_at,
    })
}

#[inline]
fn win_outcome(winner: Side) -> MatchOutcome {
    match winner {
        Side::Black => MatchOutcome::BlackWinBreakthrough,
        Side::White => MatchOutcome::WhiteWinBreakthrough,
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play a series with colors alternating each game, player 1 taking Black
/// in even-numbered games.
pub fn play_match_series(
    player1: impl Fn() -> Box<dyn Engine>,
    player2: impl Fn() -> Box<dyn Engine>,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String> {
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for game in 0..config.games {
        let player1_is_black = game % 2 == 0;
        let (mut black, mut white) = if player1_is_black {
            (player1(), player2())
        } else {
            (player2(), player1())
        };

        let seed = config.base_seed.wrapping_add(game as u64);
        let result = play_match(black.as_mut(), white.as_mut(), seed, &config.per_game)?;

        match result.outcome {
            MatchOutcome::BlackWinBreakthrough => {
                if player1_is_black {
                    stats.player1_wins += 1;
                } else {
                    stats.player2_wins += 1;
                }
            }
            MatchOutcome::WhiteWinBreakthrough => {
                if player1_is_black {
                    stats.player2_wins += 1;
                } else {
                    stats.player1_wins += 1;
                }
            }
            MatchOutcome::DrawStalled | MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
            }
        }

        stats.outcomes.push(result.outcome);
    }

    Ok(stats)
}
