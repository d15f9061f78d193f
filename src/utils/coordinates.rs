//! Move and square text for human interchange.
//!
//! Squares render as `<file><rank>` with file `'A' + column` and rank
//! `8 - row`, and moves as `<from>-<to>` (for example `A2-B3`). Parsing is
//! the exact inverse transform, so externally supplied moves round-trip.

use crate::game_state::board_types::{BoardLocation, PawnMove};

/// Render a board location (for example: `(0, 0)` to "A8").
#[inline]
pub fn location_to_text(location: BoardLocation) -> String {
    let file = char::from(b'A' + location.1 as u8);
    let rank = char::from(b'0' + (8 - location.0) as u8);
    format!("{file}{rank}")
}

/// Render a move (for example: "A2-B3").
#[inline]
pub fn move_to_text(pawn_move: PawnMove) -> String {
    format!(
        "{}-{}",
        location_to_text(pawn_move.from),
        location_to_text(pawn_move.to)
    )
}

/// Parse a square (for example: "A8"). Lowercase files are accepted.
pub fn text_to_location(text: &str) -> Result<BoardLocation, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid square: {text}"));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) {
        return Err(format!("Invalid file: {}", bytes[0] as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid rank: {}", rank as char));
    }

    let col = (file - b'A') as i8;
    let row = 8 - (rank - b'0') as i8;
    Ok((row, col))
}

/// Parse a move in `<from>-<to>` form (for example: "A2-B3").
pub fn text_to_move(text: &str) -> Result<PawnMove, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'-' {
        return Err(format!("Invalid move format (expected A1-B2): {text}"));
    }

    let from = text_to_location(&text[0..2])?;
    let to = text_to_location(&text[3..5])?;
    Ok(PawnMove::new(from, to))
}
