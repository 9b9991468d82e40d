//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! internal `(row, column)` squares reused by FEN, PGN, and the front-end.

use crate::game_state::chess_types::{on_board, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    // Row 0 is rank 8, so ranks count down from the top of the grid.
    let row = (b'8' - rank) as i8;
    let col = (file - b'a') as i8;
    Ok((row, col))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !on_board(square) {
        return Err(format!("Square out of bounds: {square:?}"));
    }

    let file_char = char::from(b'a' + square.1 as u8);
    let rank_char = char::from(b'8' - square.0 as u8);

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), (7, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), (0, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), (4, 4));
        assert_eq!(square_to_algebraic((7, 0)).expect("(7,0) should convert"), "a1");
        assert_eq!(square_to_algebraic((0, 7)).expect("(0,7) should convert"), "h8");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_square("i4").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e44").is_err());
        assert!(square_to_algebraic((8, 0)).is_err());
    }
}
