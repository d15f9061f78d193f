//! Console front-end: help screen, single-position queries, and the
//! interactive human-vs-engine game loop.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use breakwave::engines::engine_threat_wave::ThreatWaveEngine;
use breakwave::engines::engine_trait::Engine;
use breakwave::game_state::board::Board;
use breakwave::game_state::board_types::Side;
use breakwave::game_state::breakthrough_rules::{winner_of, MAX_GAME_TURNS, STARTING_POSITION_DIGITS};
use breakwave::move_generation::generate_moves::{generate_moves, is_legal};
use breakwave::move_generation::move_apply::apply_move;
use breakwave::utils::coordinates::{move_to_text, text_to_move};
use breakwave::utils::encoding::{parse_board, EncodingTable, DIGIT_ENCODING, GLYPH_ENCODING};
use breakwave::utils::render_board::render_board;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("help") | Some("--help") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some("play") => {
            let table = if args.get(1).map(String::as_str) == Some("glyphs") {
                GLYPH_ENCODING
            } else {
                DIGIT_ENCODING
            };
            match run_interactive_game(&table) {
                Ok(()) => ExitCode::SUCCESS,
                Err(message) => {
                    eprintln!("Error: {message}");
                    ExitCode::FAILURE
                }
            }
        }
        Some(board_text) => {
            let Some(side_token) = args.get(1) else {
                eprintln!("Error: missing side argument");
                print_help();
                return ExitCode::FAILURE;
            };
            match run_position_query(board_text, side_token) {
                Ok(()) => ExitCode::SUCCESS,
                Err(message) => {
                    eprintln!("Error: {message}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn print_help() {
    println!("BREAKWAVE - a Breakthrough engine");
    println!("Usage:");
    println!("  breakwave play [glyphs]        Play a game, human vs engine");
    println!("  breakwave <board64> <side>     Compute a single engine move");
    println!();
    println!("Examples:");
    println!("  breakwave play");
    println!("  breakwave {STARTING_POSITION_DIGITS} 1");
    println!();
    println!("Board notation (64 characters, rank 8 first):");
    println!("  digit encoding: 1 = Black pawn, 0 = White pawn, . = empty");
    println!("  glyph encoding: @ = Black pawn, O = White pawn, . = empty");
    println!("  The side token picks the encoding: 1/0 digits, @/O glyphs.");
}

/// One-shot mode: read a position, print the engine's move for the given
/// side. The side token doubles as the encoding selector.
fn run_position_query(board_text: &str, side_token: &str) -> Result<(), String> {
    let (side, table) = match side_token {
        "1" => (Side::Black, DIGIT_ENCODING),
        "0" => (Side::White, DIGIT_ENCODING),
        "@" => (Side::Black, GLYPH_ENCODING),
        "O" => (Side::White, GLYPH_ENCODING),
        other => {
            return Err(format!(
                "Side must be '1'/'0' (digits) or '@'/'O' (glyphs), got '{other}'"
            ))
        }
    };

    let board = parse_board(board_text, &table)?;

    let mut engine = ThreatWaveEngine::new();
    let output = engine.choose_move(&board, side)?;

    match output.best_move {
        Some(best) => {
            println!("{}", move_to_text(best));
            Ok(())
        }
        None => Err("No move possible".to_owned()),
    }
}

fn run_interactive_game(table: &EncodingTable) -> Result<(), String> {
    let mut board = Board::from_encoding(STARTING_POSITION_DIGITS, &DIGIT_ENCODING);
    let mut engine = ThreatWaveEngine::new();

    let human = Side::White;
    let mut current = human;
    let mut turn: u32 = 1;

    println!("BREAKTHROUGH: HUMAN vs ENGINE");
    println!("Goal: advance one pawn to the far rank.");
    println!("Moves: one step forward, or diagonally forward to capture.");
    println!();
    println!("{}", render_board(&board, table));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while turn <= MAX_GAME_TURNS {
        println!();
        println!("--- Turn {turn} ---");

        if let Some(winner) = winner_of(&board) {
            if winner == human {
                println!("YOU WIN! One of your pawns reached rank 8.");
            } else {
                println!("ENGINE WINS! A black pawn reached rank 1.");
            }
            println!("GAME OVER");
            return Ok(());
        }

        let legal = generate_moves(&board, current);
        if legal.is_empty() {
            println!("No move possible for the side to play - stalemate.");
            println!("GAME OVER");
            return Ok(());
        }

        if current == human {
            println!("Your turn (format: A2-B3)");
            print!("Your move: ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            let Some(line) = lines.next() else {
                println!("Input closed - game abandoned.");
                return Ok(());
            };
            let line = line.map_err(|e| e.to_string())?;
            let trimmed = line.trim();

            let chosen = match text_to_move(trimmed) {
                Ok(parsed) => parsed,
                Err(message) => {
                    println!("{message}");
                    continue;
                }
            };

            if !is_legal(&board, human, chosen) {
                println!("Illegal move: {trimmed}");
                continue;
            }

            println!("You play: {}", move_to_text(chosen));
            apply_move(&mut board, chosen);
        } else {
            let output = engine.choose_move(&board, current)?;
            let Some(best) = output.best_move else {
                println!("Engine has no move - stalemate.");
                println!("GAME OVER");
                return Ok(());
            };
            println!("Engine plays: {}", move_to_text(best));
            apply_move(&mut board, best);
        }

        println!();
        println!("{}", render_board(&board, table));

        current = current.opposite();
        turn += 1;
    }

    println!("Game too long - declared a draw.");
    println!("GAME OVER");
    Ok(())
}
