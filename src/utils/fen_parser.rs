//! FEN-to-GameState parser.
//!
//! Builds a fully-populated game state from a Forsyth-Edwards Notation
//! string. Only the piece placement and side-to-move fields are modeled;
//! castling, en-passant, and clock fields are accepted so standard FENs
//! parse, but their content is not interpreted. Parsing enforces the
//! one-king-per-color invariant so the king caches are always valid.

use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    // Castling, en-passant, and clock fields are not modeled by this engine.

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let king_squares = locate_kings(&board)?;

    Ok(GameState {
        board,
        side_to_move,
        king_squares,
        move_history: Vec::new(),
        checkmate: false,
        stalemate: false,
    })
}

fn parse_board(board_part: &str) -> Result<BoardGrid, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board: BoardGrid = [[None; 8]; 8];

    // FEN lists ranks top-down, which is exactly the grid's row order.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn locate_kings(board: &BoardGrid) -> Result<[Square; 2], String> {
    let mut kings: [Option<Square>; 2] = [None, None];

    for (row, rank) in board.iter().enumerate() {
        for (col, cell) in rank.iter().enumerate() {
            let Some(piece) = cell else { continue };
            if piece.kind != PieceKind::King {
                continue;
            }

            let slot = &mut kings[piece.color.index()];
            if slot.is_some() {
                return Err(format!("Board has more than one {:?} king", piece.color));
            }
            *slot = Some((row as i8, col as i8));
        }
    }

    match kings {
        [Some(white), Some(black)] => Ok([white, black]),
        [None, _] => Err("Board is missing the White king".to_owned()),
        [_, None] => Err("Board is missing the Black king".to_owned()),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
