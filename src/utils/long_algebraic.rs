//! Move conversions for long algebraic coordinates (for example: "e2e4").

use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse "e2e4"-style input against the current board, snapshotting the
/// affected squares. Rejects empty start squares and wrong-color movers;
/// geometric legality is the engine's job, not the parser's.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> Result<ChessMove, String> {
    if text.len() != 4 {
        return Err(format!("Invalid long algebraic move: {text}"));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;

    let Some(piece_moved) = game_state.piece_at(start) else {
        return Err(format!("No piece on from-square: {}", &text[0..2]));
    };
    if piece_moved.color != game_state.side_to_move {
        return Err("Attempted to move a piece that is not on side to move".to_owned());
    }

    Ok(ChessMove::new(
        start,
        end,
        piece_moved,
        game_state.piece_at(end),
    ))
}

/// Render a move as long algebraic coordinates.
pub fn move_to_long_algebraic(chess_move: &ChessMove) -> Result<String, String> {
    let mut out = String::new();
    out.push_str(&square_to_algebraic(chess_move.start)?);
    out.push_str(&square_to_algebraic(chess_move.end)?);
    Ok(out)
}
