//! Pseudo-legal pawn move generation.
//!
//! Pushes require empty squares; captures are the two forward diagonals and
//! each diagonal's bound check is independent, so an edge-file pawn keeps
//! its one on-board capture. Promotion is not modeled: a pawn that reaches
//! the last rank keeps its kind and simply generates nothing further.

use crate::game_state::chess_types::{offset_square, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;

/// Append pseudo-legal moves for the pawn on `square`.
pub fn generate_pawn_moves(game_state: &GameState, square: Square, out: &mut Vec<ChessMove>) {
    let Some(pawn) = game_state.piece_at(square) else {
        return;
    };
    let step = pawn.color.pawn_step();

    if let Some(one_ahead) = offset_square(square, step, 0) {
        if game_state.piece_at(one_ahead).is_none() {
            out.push(ChessMove::new(square, one_ahead, pawn, None));

            if square.0 == pawn.color.pawn_home_row() {
                if let Some(two_ahead) = offset_square(square, 2 * step, 0) {
                    if game_state.piece_at(two_ahead).is_none() {
                        out.push(ChessMove::new(square, two_ahead, pawn, None));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diagonal) = offset_square(square, step, d_col) else {
            continue;
        };
        if let Some(target) = game_state.piece_at(diagonal) {
            if target.color != pawn.color {
                out.push(ChessMove::new(square, diagonal, pawn, Some(target)));
            }
        }
    }
}
