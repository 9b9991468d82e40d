//! GameState-to-FEN generator.
//!
//! The inverse of the parser: piece placement and side to move reflect the
//! grid, while the castling, en-passant, and halfmove fields the engine
//! does not model are emitted as placeholders. The fullmove number is
//! derived from the history stack.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::new();

    for (row, rank) in game_state.board.iter().enumerate() {
        let mut empty_run = 0u32;

        for cell in rank {
            match cell {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(*piece));
                }
            }
        }

        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if row < 7 {
            out.push('/');
        }
    }

    let side = if game_state.white_to_move() { 'w' } else { 'b' };
    let fullmove = game_state.move_history.len() / 2 + 1;
    out.push_str(&format!(" {side} - - 0 {fullmove}"));

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    #[test]
    fn startpos_round_trips_through_fen() {
        let game_state = GameState::new_game();
        let fen = generate_fen(&game_state);

        assert!(fen.starts_with("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"));

        let reparsed = parse_fen(&fen).expect("generated FEN should parse");
        assert_eq!(generate_fen(&reparsed), fen);
    }

    #[test]
    fn side_and_fullmove_track_applied_moves() {
        let mut game_state = GameState::new_game();

        let opening =
            long_algebraic_to_move("e2e4", &game_state).expect("e2e4 should parse");
        game_state.make_move(opening).expect("e2e4 should be legal");

        let fen = generate_fen(&game_state);
        assert!(fen.contains(" b "));
        assert!(fen.ends_with(" 1"));

        let reply = long_algebraic_to_move("e7e5", &game_state).expect("e7e5 should parse");
        game_state.make_move(reply).expect("e7e5 should be legal");
        assert!(generate_fen(&game_state).ends_with(" 2"));
    }
}
