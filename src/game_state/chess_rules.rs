//! Canonical chess-rule constants: board geometry, capacities, and the
//! standard starting position.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Upper bound on pseudo-legal moves from any reachable position.
pub const MAX_MOVES: usize = 256;

/// Maximum supported game/search depth; bounds the undo stack.
pub const MAX_DEPTH: usize = 256;

pub const WHITE_PAWN_START_RANK: u8 = 1;
pub const BLACK_PAWN_START_RANK: u8 = 6;

pub const WHITE_PROMOTION_RANK: u8 = 7;
pub const BLACK_PROMOTION_RANK: u8 = 0;

/// Destination file of the king when castling.
pub const KING_SIDE_CASTLE_FILE: u8 = 6;
pub const QUEEN_SIDE_CASTLE_FILE: u8 = 2;

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => WHITE_PAWN_START_RANK,
        Color::Black => BLACK_PAWN_START_RANK,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => WHITE_PROMOTION_RANK,
        Color::Black => BLACK_PROMOTION_RANK,
    }
}

/// Home square of the king, where castling originates.
#[inline]
pub const fn king_home_square(color: Color) -> Square {
    match color {
        Color::White => 4,
        Color::Black => 60,
    }
}

/// Home squares of the rooks as `(queenside, kingside)`.
#[inline]
pub const fn rook_home_squares(color: Color) -> (Square, Square) {
    match color {
        Color::White => (0, 7),
        Color::Black => (56, 63),
    }
}
