//! Core board state representation.
//!
//! `GameState` is the central model for the engine. It stores the 8x8 grid,
//! the side to move, cached king squares, the move history stack used by
//! the apply/undo workflow, and the terminal flags recomputed on every
//! legality query.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::generate_valid_moves;
use crate::moves::move_description::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Game state for make/unmake style workflows.
///
/// Invariants: exactly one king of each color is on the board, and
/// `king_squares` always equals their true locations. `checkmate` and
/// `stalemate` are only meaningful immediately after a `valid_moves` call.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: BoardGrid,
    pub side_to_move: Color,

    // [color] -> king location cache, refreshed on every apply/undo.
    pub king_squares: [Square; 2],

    // Append-on-apply, pop-on-undo.
    pub move_history: Vec<ChessMove>,

    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.0 as usize][square.1 as usize]
    }

    #[inline]
    fn set_square(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.0 as usize][square.1 as usize] = piece;
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Apply `chess_move` without any legality check. The caller must
    /// guarantee legality (or accept corrupted state); `make_move` is the
    /// validated entry point.
    pub fn apply_move(&mut self, chess_move: ChessMove) {
        self.set_square(chess_move.start, None);
        // Promotion is not modeled: the piece arrives with its kind unchanged.
        self.set_square(chess_move.end, Some(chess_move.piece_moved));
        self.move_history.push(chess_move);
        self.side_to_move = self.side_to_move.opposite();

        if chess_move.piece_moved.kind == PieceKind::King {
            self.king_squares[chess_move.piece_moved.color.index()] = chess_move.end;
        }
    }

    /// Reverse the most recent move. A no-op on empty history; returns the
    /// undone move otherwise. Terminal flags are cleared because the
    /// restored position must be re-evaluated.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let chess_move = self.move_history.pop()?;

        self.set_square(chess_move.start, Some(chess_move.piece_moved));
        self.set_square(chess_move.end, chess_move.piece_captured);
        self.side_to_move = self.side_to_move.opposite();

        if chess_move.piece_moved.kind == PieceKind::King {
            self.king_squares[chess_move.piece_moved.color.index()] = chess_move.start;
        }

        self.checkmate = false;
        self.stalemate = false;

        Some(chess_move)
    }

    /// Validated move application: recompute the legal set and apply its
    /// member structurally equal to `chess_move`. Applying the generator's
    /// copy (not the caller's) keeps a stale caller snapshot from ever
    /// reaching the board.
    pub fn make_move(&mut self, chess_move: ChessMove) -> Result<(), ChessError> {
        let legal = generate_valid_moves(self);
        match legal.into_iter().find(|candidate| *candidate == chess_move) {
            Some(matched) => {
                self.apply_move(matched);
                Ok(())
            }
            None => Err(ChessError::IllegalMove(chess_move)),
        }
    }

    /// The current legal move set, in stable generation order. Also
    /// refreshes the checkmate/stalemate flags.
    #[inline]
    pub fn valid_moves(&mut self) -> Vec<ChessMove> {
        generate_valid_moves(self)
    }

    /// Whether the side to move is currently in check.
    #[inline]
    pub fn in_check(&mut self) -> bool {
        is_in_check(self)
    }
}
