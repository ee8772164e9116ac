//! Legal move filtering and coordinate-text move resolution.
//!
//! Every pseudo-legal candidate is applied, check-tested for the mover's own
//! king, and undone. The make/test/unmake cycle is the sole legality test.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::move_generation::checks::king_in_check;
use crate::move_generation::move_list::MoveList;
use crate::move_generation::pseudo_moves::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::{move_from, move_to, promoted_piece};
use crate::utils::algebraic::{algebraic_to_square, square_label};

/// All legal moves for the side to move.
pub fn generate_legal_moves(board: &mut Board) -> EngineResult<MoveList> {
    let mover = board.side_to_move;
    let pseudo = generate_pseudo_legal_moves(board);
    let mut legal = MoveList::new();

    for mv in pseudo.iter() {
        board.make_move(mv)?;
        if !king_in_check(board, mover) {
            legal.push(mv);
        }
        board.unmake_move();
    }

    Ok(legal)
}

/// Resolve a square pair plus optional promotion piece against the current
/// legal-move list. Rejected with `IllegalMove` when nothing matches.
pub fn find_legal_move(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> EngineResult<Move> {
    let legal = generate_legal_moves(board)?;

    for mv in legal.iter() {
        if move_from(mv) == from && move_to(mv) == to && promoted_piece(mv) == promotion {
            return Ok(mv);
        }
    }

    Err(EngineError::IllegalMove(format!(
        "no legal move from {} to {}",
        square_label(from),
        square_label(to)
    )))
}

/// Parse a coordinate move such as `e2e4` or `e7e8q`, resolve it against the
/// legal-move list, and apply it. Returns the applied move.
pub fn play_move(board: &mut Board, text: &str) -> EngineResult<Move> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(EngineError::IllegalMove(format!(
            "expected a coordinate move like e2e4 or e7e8q, got {text:?}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(ch) => Some(match ch.to_ascii_lowercase() {
            b'q' => PieceKind::Queen,
            b'r' => PieceKind::Rook,
            b'b' => PieceKind::Bishop,
            b'n' => PieceKind::Knight,
            other => {
                return Err(EngineError::IllegalMove(format!(
                    "invalid promotion piece {:?}",
                    other as char
                )))
            }
        }),
    };

    let mv = find_legal_move(board, from, to, promotion)?;
    board.make_move(mv)?;
    Ok(mv)
}
