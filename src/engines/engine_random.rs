//! Uniform random move selection.
//!
//! Picks among legal moves with no search and no evaluation; used by the
//! front-end's `random` command and by integration-style playout tests.

use rand::prelude::IndexedRandom;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_valid_moves;
use crate::moves::move_description::ChessMove;

/// Pick a uniformly random legal move, or `None` when the side to move has
/// no legal moves (checkmate or stalemate).
pub fn choose_random_move(game_state: &mut GameState) -> Option<ChessMove> {
    let legal = generate_valid_moves(game_state);
    let mut rng = rand::rng();
    legal.as_slice().choose(&mut rng).copied()
}

#[cfg(test)]
mod tests {
    use super::choose_random_move;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::generate_valid_moves;

    #[test]
    fn chosen_move_is_a_member_of_the_legal_set() {
        let mut game_state = GameState::new_game();
        let legal = generate_valid_moves(&mut game_state);

        let chosen = choose_random_move(&mut game_state).expect("startpos should have moves");
        assert!(legal.contains(&chosen));
    }

    #[test]
    fn mated_position_yields_no_move() {
        let mut game_state = GameState::from_fen("R6k/R7/8/8/8/8/8/7K b - - 0 1")
            .expect("test FEN should parse");
        assert_eq!(choose_random_move(&mut game_state), None);
        assert!(game_state.checkmate);
    }

    #[test]
    fn random_playout_keeps_state_consistent() {
        let mut game_state = GameState::new_game();
        let mut plies = 0usize;

        while plies < 60 {
            let Some(chess_move) = choose_random_move(&mut game_state) else {
                break;
            };
            game_state
                .make_move(chess_move)
                .expect("random legal move should apply");
            plies += 1;

            // King caches must track the board at every ply.
            for color in [Color::White, Color::Black] {
                let cached = game_state.king_square(color);
                let piece = game_state
                    .piece_at(cached)
                    .expect("cached king square should be occupied");
                assert_eq!(piece.color, color);
                assert_eq!(piece.kind, PieceKind::King);
            }
        }

        // Unwind the whole game and verify we are back at the start.
        while game_state.undo_move().is_some() {}
        assert_eq!(game_state.get_fen(), GameState::new_game().get_fen());
    }
}
