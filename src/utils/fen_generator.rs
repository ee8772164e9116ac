//! FEN output for the current board position.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    Color, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
};
use crate::utils::algebraic::square_label;

/// Emit the standard six-field FEN string for `board`.
pub fn generate_fen(board: &Board) -> String {
    let mut fen = String::with_capacity(90);

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..8u8 {
            match board.piece_on(rank * 8 + file) {
                None => empty_run += 1,
                Some((color, piece)) => {
                    if empty_run > 0 {
                        fen.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    fen.push(piece.fen_char(color));
                }
            }
        }

        if empty_run > 0 {
            fen.push((b'0' + empty_run) as char);
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match board.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    if board.castling_rights == 0 {
        fen.push('-');
    } else {
        for (right, letter) in [
            (CASTLE_WHITE_KINGSIDE, 'K'),
            (CASTLE_WHITE_QUEENSIDE, 'Q'),
            (CASTLE_BLACK_KINGSIDE, 'k'),
            (CASTLE_BLACK_QUEENSIDE, 'q'),
        ] {
            if board.castling_rights & right != 0 {
                fen.push(letter);
            }
        }
    }

    fen.push(' ');
    match board.en_passant_square {
        None => fen.push('-'),
        Some(square) => fen.push_str(&square_label(square)),
    }

    fen.push_str(&format!(" {} {}", board.halfmove_clock, board.fullmove_number));
    fen
}
