//! Conversions between square indices and algebraic coordinates.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::moves::move_descriptions::{move_from, move_to, promoted_piece};

/// Parse a two-character coordinate such as `e4` into a square index.
pub fn algebraic_to_square(text: &str) -> EngineResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(EngineError::InvalidSquare(text.to_string()));
    }

    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    if file > 7 || rank > 7 {
        return Err(EngineError::InvalidSquare(text.to_string()));
    }

    Ok(rank * 8 + file)
}

/// Format a square index as a coordinate such as `e4`.
pub fn square_to_algebraic(square: Square) -> EngineResult<String> {
    if square > 63 {
        return Err(EngineError::InvalidSquare(format!("square index {square}")));
    }
    Ok(square_label(square))
}

/// Infallible square formatting for error messages and logs. Out-of-range
/// indices render as `??` instead of failing.
pub fn square_label(square: Square) -> String {
    if square > 63 {
        return "??".to_string();
    }
    let file = (b'a' + square % 8) as char;
    let rank = (b'1' + square / 8) as char;
    format!("{file}{rank}")
}

/// Coordinate text for a packed move: from-square, to-square, and a trailing
/// promotion letter when present (`e2e4`, `e7e8q`).
pub fn move_text(mv: Move) -> String {
    let mut text = format!("{}{}", square_label(move_from(mv)), square_label(move_to(mv)));
    if let Some(piece) = promoted_piece(mv) {
        text.push(match piece {
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => '?',
        });
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{pack_move, MoveFlag};

    #[test]
    fn corner_squares_round_trip() {
        assert_eq!(algebraic_to_square("a1").expect("a1 parses"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 parses"), 7);
        assert_eq!(algebraic_to_square("a8").expect("a8 parses"), 56);
        assert_eq!(algebraic_to_square("h8").expect("h8 parses"), 63);

        for square in 0..64u8 {
            let text = square_to_algebraic(square).expect("in range");
            assert_eq!(algebraic_to_square(&text).expect("round trip"), square);
        }
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        assert!(algebraic_to_square("").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(square_to_algebraic(64).is_err());
    }

    #[test]
    fn move_text_includes_the_promotion_letter() {
        let quiet = pack_move(12, 28, false, MoveFlag::Quiet);
        assert_eq!(move_text(quiet), "e2e4");

        let promo = pack_move(52, 60, false, MoveFlag::PromoteKnight);
        assert_eq!(move_text(promo), "e7e8n");
    }
}
