//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::{offset_square, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;

/// Walk each direction one step at a time, appending empty-square moves and
/// stopping at the first occupied square (capturing it when hostile).
pub fn slide_moves(
    game_state: &GameState,
    square: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = game_state.piece_at(square) else {
        return;
    };

    for &(d_row, d_col) in directions {
        let mut target = offset_square(square, d_row, d_col);
        while let Some(end) = target {
            match game_state.piece_at(end) {
                None => {
                    out.push(ChessMove::new(square, end, piece, None));
                    target = offset_square(end, d_row, d_col);
                }
                Some(blocker) if blocker.color != piece.color => {
                    out.push(ChessMove::new(square, end, piece, Some(blocker)));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Append one move per offset that lands on the board and is not occupied by
/// a friendly piece.
pub fn offset_moves(
    game_state: &GameState,
    square: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = game_state.piece_at(square) else {
        return;
    };

    for &(d_row, d_col) in offsets {
        let Some(end) = offset_square(square, d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(end) {
            None => out.push(ChessMove::new(square, end, piece, None)),
            Some(blocker) if blocker.color != piece.color => {
                out.push(ChessMove::new(square, end, piece, Some(blocker)));
            }
            Some(_) => {}
        }
    }
}
