//! Static material evaluation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};

/// Standard material values in pawn units; the king carries no material.
#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Material balance, white minus black. Positive favors white regardless of
/// the side to move; search callers negate per perspective.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;

    for piece in PieceKind::ALL {
        let value = piece_value(piece);
        let white = board.pieces[Color::White.index()][piece.index()].count_ones() as i32;
        let black = board.pieces[Color::Black.index()][piece.index()].count_ones() as i32;
        score += value * (white - black);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_material_is_balanced() {
        let board = Board::new_game();
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn an_extra_queen_is_worth_nine() {
        let board =
            Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN parses");
        assert_eq!(evaluate(&board), 9);
    }

    #[test]
    fn black_material_counts_negative() {
        let board =
            Board::from_fen("3rk3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN parses");
        assert_eq!(evaluate(&board), -5);
    }
}
