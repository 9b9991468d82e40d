//! Check and attack queries.
//!
//! Attack detection deliberately reuses pseudo-legal generation: whether an
//! attacking piece would expose its own king is irrelevant to whether it
//! attacks a square right now. The side-to-move flag is flipped around the
//! opponent generation and always restored before returning.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_pseudo_moves;

/// Whether the side to move's king square is attacked.
#[inline]
pub fn is_in_check(game_state: &mut GameState) -> bool {
    let king_square = game_state.king_square(game_state.side_to_move);
    is_square_under_attack(game_state, king_square)
}

/// Whether any opponent pseudo-legal move ends on `target`.
pub fn is_square_under_attack(game_state: &mut GameState, target: Square) -> bool {
    game_state.side_to_move = game_state.side_to_move.opposite();
    let opponent_moves = generate_pseudo_moves(game_state);
    game_state.side_to_move = game_state.side_to_move.opposite();

    opponent_moves.iter().any(|mv| mv.end == target)
}
