//! Legal move-tree node counting.
//!
//! The standard movegen correctness probe: count positions reachable at a
//! fixed depth by recursing over the legal set with apply/undo. Because
//! castling, en passant, and promotion are not modeled, startpos counts
//! match the published table only through depth 4, which is exactly the
//! range the tests and benches assert.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_valid_moves;

/// Count leaf nodes at `depth` plies. The board is restored before
/// returning; the terminal flags are left cleared.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_valid_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for chess_move in moves {
        game_state.apply_move(chess_move);
        nodes += perft(game_state, depth - 1);
        game_state.undo_move();
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;

    #[test]
    fn perft_depth_zero_is_one_node() {
        let mut game_state = GameState::new_game();
        assert_eq!(perft(&mut game_state, 0), 1);
    }

    #[test]
    fn startpos_counts_match_through_depth_three() {
        let mut game_state = GameState::new_game();

        assert_eq!(perft(&mut game_state, 1), 20);
        assert_eq!(perft(&mut game_state, 2), 400);
        assert_eq!(perft(&mut game_state, 3), 8_902);
    }

    #[test]
    fn perft_restores_the_board() {
        let mut game_state = GameState::new_game();
        let before = game_state.get_fen();

        perft(&mut game_state, 3);

        assert_eq!(game_state.get_fen(), before);
        assert!(game_state.move_history.is_empty());
    }
}
