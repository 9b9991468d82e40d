//! Pseudo-legal knight move generation.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;
use crate::moves::move_shared::offset_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-1, -2),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, -2),
];

/// Append pseudo-legal jumps for the knight on `square`.
pub fn generate_knight_moves(game_state: &GameState, square: Square, out: &mut Vec<ChessMove>) {
    offset_moves(game_state, square, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn central_knight_has_eight_targets() {
        let game_state =
            GameState::from_fen("7k/8/8/8/3N4/8/8/7K w - - 0 1").expect("test FEN should parse");
        let mut moves = Vec::new();
        generate_knight_moves(&game_state, (4, 3), &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn cornered_knight_is_clipped_to_the_board() {
        let game_state =
            GameState::from_fen("7k/8/8/8/8/8/8/N6K w - - 0 1").expect("test FEN should parse");
        let mut moves = Vec::new();
        generate_knight_moves(&game_state, (7, 0), &mut moves);

        let ends: Vec<_> = moves.iter().map(|mv| mv.end).collect();
        assert_eq!(ends.len(), 2);
        assert!(ends.contains(&(5, 1)));
        assert!(ends.contains(&(6, 2)));
    }

    #[test]
    fn friendly_squares_are_skipped_and_enemies_captured() {
        let game_state = GameState::from_fen("7k/8/8/1P3p2/3N4/8/8/7K w - - 0 1")
            .expect("test FEN should parse");
        let mut moves = Vec::new();
        generate_knight_moves(&game_state, (4, 3), &mut moves);

        let ends: Vec<_> = moves.iter().map(|mv| mv.end).collect();
        assert!(!ends.contains(&(3, 1)));
        assert_eq!(moves.len(), 7);
    }
}
