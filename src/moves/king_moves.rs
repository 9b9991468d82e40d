//! Pseudo-legal king move generation.
//!
//! One step in each of the eight adjacent directions. Castling is not
//! modeled. Stepping into attacked squares is filtered later, like every
//! other self-check, by the legality pass.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;
use crate::moves::move_shared::offset_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 1),
];

/// Append pseudo-legal single steps for the king on `square`.
pub fn generate_king_moves(game_state: &GameState, square: Square, out: &mut Vec<ChessMove>) {
    offset_moves(game_state, square, &KING_OFFSETS, out);
}
