//! Pseudo-legal queen move generation.
//!
//! The queen is the union of rook and bishop generation from the same
//! square, in that order.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::move_description::ChessMove;
use crate::moves::rook_moves::generate_rook_moves;

pub fn generate_queen_moves(game_state: &GameState, square: Square, out: &mut Vec<ChessMove>) {
    generate_rook_moves(game_state, square, out);
    generate_bishop_moves(game_state, square, out);
}
