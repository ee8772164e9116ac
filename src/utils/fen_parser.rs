//! FEN parsing into a validated `Board`.
//!
//! Five fields are required (piece placement, side to move, castling rights,
//! en-passant target, halfmove clock); the fullmove number is optional and
//! defaults to 1. Every malformed input maps to
//! `InvalidPositionDescription` with a message naming the offending field.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    Color, PieceKind, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::utils::algebraic::algebraic_to_square;

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidPositionDescription(message.into())
}

/// Parse a FEN string into a fully validated board with empty move history.
pub fn parse_fen(fen: &str) -> EngineResult<Board> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 5 || fields.len() > 6 {
        return Err(invalid(format!(
            "expected 5 or 6 fields, got {}",
            fields.len()
        )));
    }

    let mut board = Board::new_empty();

    parse_placement(&mut board, fields[0])?;

    board.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(invalid(format!("side to move must be w or b, got {other:?}"))),
    };

    board.castling_rights = parse_castling(fields[2])?;

    board.en_passant_square = match fields[3] {
        "-" => None,
        text => Some(parse_en_passant_square(text)?),
    };

    board.halfmove_clock = fields[4]
        .parse()
        .map_err(|_| invalid(format!("halfmove clock {:?} is not a number", fields[4])))?;

    board.fullmove_number = match fields.get(5) {
        None => 1,
        Some(text) => text
            .parse()
            .map_err(|_| invalid(format!("fullmove number {text:?} is not a number")))?,
    };

    locate_kings(&mut board)?;
    board.recalc_occupancy();

    Ok(board)
}

fn parse_placement(board: &mut Board, placement: &str) -> EngineResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!(
            "piece placement needs 8 ranks, got {}",
            ranks.len()
        )));
    }

    // FEN lists ranks from 8 down to 1.
    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;

        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(invalid(format!("invalid empty-square count {ch}")));
                }
                file += skip as u8;
                continue;
            }

            let (color, piece) = PieceKind::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("unknown piece letter {ch:?}")))?;
            if file > 7 {
                return Err(invalid(format!("rank {} overflows 8 files", rank + 1)));
            }

            board.pieces[color.index()][piece.index()] |= 1u64 << (rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!(
                "rank {} describes {file} files instead of 8",
                rank + 1
            )));
        }
    }

    Ok(())
}

fn parse_castling(text: &str) -> EngineResult<u8> {
    if text == "-" {
        return Ok(0);
    }
    if text.is_empty() || text.len() > 4 {
        return Err(invalid(format!("invalid castling field {text:?}")));
    }

    let mut rights = 0u8;
    for ch in text.chars() {
        let right = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            other => return Err(invalid(format!("unknown castling letter {other:?}"))),
        };
        if rights & right != 0 {
            return Err(invalid(format!("duplicate castling letter {ch:?}")));
        }
        rights |= right;
    }

    Ok(rights)
}

fn parse_en_passant_square(text: &str) -> EngineResult<Square> {
    let square = algebraic_to_square(text)
        .map_err(|_| invalid(format!("invalid en-passant square {text:?}")))?;

    let rank = square / 8;
    if rank != 2 && rank != 5 {
        return Err(invalid(format!(
            "en-passant square {text} is not on rank 3 or 6"
        )));
    }

    Ok(square)
}

fn locate_kings(board: &mut Board) -> EngineResult<()> {
    for color in [Color::White, Color::Black] {
        let kings = board.pieces[color.index()][PieceKind::King.index()];
        if kings.count_ones() != 1 {
            return Err(invalid(format!(
                "{} kings found for {:?}, expected exactly 1",
                kings.count_ones(),
                color
            )));
        }
        board.king_square[color.index()] = kings.trailing_zeros() as Square;
    }
    Ok(())
}
