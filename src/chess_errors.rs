//! Errors used throughout the rule engine.
//!
//! Game-level operations return `ChessError`; parsing utilities under
//! `utils/` return `Result<_, String>` with human-readable diagnostics.
//! The taxonomy is deliberately narrow: the engine trusts its caller
//! everywhere except `make_move`, which re-validates candidate moves
//! instead of silently corrupting state.

use crate::moves::move_description::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not a member of the current legal move set.
    ///
    /// Payload: the rejected move, for logging or display.
    IllegalMove(ChessMove),
}
