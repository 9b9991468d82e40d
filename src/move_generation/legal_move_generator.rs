//! Full legal move generation pipeline.
//!
//! Filters the pseudo-legal set by simulating each candidate against the
//! live board: apply, test the mover's king, undo. The same pass classifies
//! terminal positions, so the checkmate/stalemate flags are fresh after
//! every call and stale at any other time.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::generate_pseudo_moves;
use crate::moves::move_description::ChessMove;

/// The legal move set for the side to move, preserving generation order.
/// Updates `checkmate`/`stalemate` on the way out.
pub fn generate_valid_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let pseudo = generate_pseudo_moves(game_state);
    let mut legal = Vec::with_capacity(pseudo.len());

    for candidate in pseudo {
        game_state.apply_move(candidate);

        // `apply_move` already flipped the turn; flip again so the check
        // test runs from the mover's perspective on the post-move board.
        game_state.side_to_move = game_state.side_to_move.opposite();
        let exposes_king = is_in_check(game_state);
        game_state.side_to_move = game_state.side_to_move.opposite();

        game_state.undo_move();

        if !exposes_king {
            legal.push(candidate);
        }
    }

    if legal.is_empty() {
        if is_in_check(game_state) {
            game_state.checkmate = true;
            game_state.stalemate = false;
        } else {
            game_state.checkmate = false;
            game_state.stalemate = true;
        }
    } else {
        game_state.checkmate = false;
        game_state.stalemate = false;
    }

    legal
}
