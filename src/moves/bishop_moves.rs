//! Pseudo-legal bishop move generation.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;
use crate::moves::move_shared::slide_moves;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

/// Append pseudo-legal sliding moves for the bishop (or queen) on `square`.
pub fn generate_bishop_moves(game_state: &GameState, square: Square, out: &mut Vec<ChessMove>) {
    slide_moves(game_state, square, &BISHOP_DIRECTIONS, out);
}
