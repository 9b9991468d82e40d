//! Pseudo-legal move aggregation.
//!
//! Scans the board row-major, dispatching each side-to-move piece to its
//! generator. The resulting order (scan order, then each generator's
//! direction order) is stable so tests can rely on reproducible sequences.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_description::ChessMove;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// All geometrically valid moves for the side to move, without the
/// self-check filter.
pub fn generate_pseudo_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(64);

    for row in 0..8i8 {
        for col in 0..8i8 {
            let square = (row, col);
            let Some(piece) = game_state.piece_at(square) else {
                continue;
            };
            if piece.color != game_state.side_to_move {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, square, &mut moves),
                PieceKind::Knight => generate_knight_moves(game_state, square, &mut moves),
                PieceKind::Bishop => generate_bishop_moves(game_state, square, &mut moves),
                PieceKind::Rook => generate_rook_moves(game_state, square, &mut moves),
                PieceKind::Queen => generate_queen_moves(game_state, square, &mut moves),
                PieceKind::King => generate_king_moves(game_state, square, &mut moves),
            }
        }
    }

    moves
}
