//! Pseudo-legal rook move generation.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;
use crate::moves::move_shared::slide_moves;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Append pseudo-legal sliding moves for the rook (or queen) on `square`.
pub fn generate_rook_moves(game_state: &GameState, square: Square, out: &mut Vec<ChessMove>) {
    slide_moves(game_state, square, &ROOK_DIRECTIONS, out);
}
