//! PGN-style game record export.
//!
//! Serializes a finished (or in-progress) game's move history and headers
//! to PGN text for logging and interchange. Movetext uses long algebraic
//! coordinates, which are unambiguous for this engine since no move
//! carries a promotion suffix.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;
use crate::moves::move_description::ChessMove;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub fn write_pgn(
    initial_state: &GameState,
    move_history: &[ChessMove],
    result: &str,
) -> Result<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Parlor Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if !is_standard_start(&initial_fen) {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(move_history, &headers)
}

pub fn write_pgn_with_headers(
    move_history: &[ChessMove],
    headers: &BTreeMap<String, String>,
) -> Result<String, String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, chess_move) in move_history.iter().enumerate() {
        let lan = move_to_long_algebraic(chess_move)?;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

/// Placement and side to move are what identify the standard start; the
/// generator's placeholder tail fields never match the canonical constant.
fn is_standard_start(fen: &str) -> bool {
    let lead = |s: &str| s.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
    lead(fen) == lead(STARTING_POSITION_FEN)
}

fn normalize_result(result: &str) -> &'static str {
    match result.trim() {
        "1-0" => "1-0",
        "0-1" => "0-1",
        "1/2-1/2" => "1/2-1/2",
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::write_pgn;
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    #[test]
    fn scholars_opening_produces_numbered_movetext() {
        let initial = GameState::new_game();
        let mut game_state = initial.clone();

        for text in ["e2e4", "e7e5", "d1h5"] {
            let chess_move =
                long_algebraic_to_move(text, &game_state).expect("scripted move should parse");
            game_state
                .make_move(chess_move)
                .expect("scripted move should be legal");
        }

        let pgn = write_pgn(&initial, &game_state.move_history, "*")
            .expect("PGN export should succeed");

        assert!(pgn.contains("[Event \"Parlor Chess Game\"]"));
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(pgn.contains("1. e2e4 e7e5 2. d1h5 *"));
        assert!(!pgn.contains("[SetUp"));
    }

    #[test]
    fn custom_start_gets_setup_and_fen_headers() {
        let initial =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("test FEN should parse");

        let pgn = write_pgn(&initial, &[], "1/2-1/2").expect("PGN export should succeed");

        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("[FEN \"7k/5Q2/6K1/8/8/8/8/8 b"));
        assert!(pgn.contains("[Result \"1/2-1/2\"]"));
        assert!(pgn.trim_end().ends_with("1/2-1/2"));
    }

    #[test]
    fn unknown_results_normalize_to_ongoing() {
        let initial = GameState::new_game();
        let pgn = write_pgn(&initial, &[], "resigned").expect("PGN export should succeed");
        assert!(pgn.contains("[Result \"*\"]"));
    }
}
