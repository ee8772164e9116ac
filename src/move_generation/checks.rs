//! Attack detection and the game-over queries.
//!
//! `is_square_attacked` is the single source of truth for "is this king
//! safe": legality filtering, castling transit checks, and the mate and
//! stalemate scans all funnel through it. The mate/stalemate scans use the
//! uniform make, test, unmake pattern; there is no separate pin tracker.

use crate::errors::EngineResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameOutcome, PieceKind, Square};
use crate::move_generation::pseudo_moves::generate_pseudo_legal_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Is `square` attacked by any piece of `attacker`?
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let them = attacker.index();

    // A defender pawn on `square` would be attacked exactly where its own
    // attack pattern meets an enemy pawn.
    if pawn_attacks(attacker.opposite(), square) & board.pieces[them][PieceKind::Pawn.index()] != 0
    {
        return true;
    }

    if knight_attacks(square) & board.pieces[them][PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & board.pieces[them][PieceKind::King.index()] != 0 {
        return true;
    }

    let rooks_and_queens =
        board.pieces[them][PieceKind::Rook.index()] | board.pieces[them][PieceKind::Queen.index()];
    if rook_attacks(square, board.occupancy_all) & rooks_and_queens != 0 {
        return true;
    }

    let bishops_and_queens = board.pieces[them][PieceKind::Bishop.index()]
        | board.pieces[them][PieceKind::Queen.index()];
    if bishop_attacks(square, board.occupancy_all) & bishops_and_queens != 0 {
        return true;
    }

    false
}

/// Is `color`'s king attacked? Reads the king-square cache, which make/unmake
/// keeps in lockstep with the king bitboard.
#[inline]
pub fn king_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square[color.index()], color.opposite())
}

/// True when the side to move is in check and no move escapes it.
pub fn is_checkmate(board: &mut Board) -> EngineResult<bool> {
    if !board.in_check() {
        return Ok(false);
    }
    Ok(!has_legal_reply(board)?)
}

/// True when the side to move is not in check but has no legal move.
pub fn is_stalemate(board: &mut Board) -> EngineResult<bool> {
    if board.in_check() {
        return Ok(false);
    }
    Ok(!has_legal_reply(board)?)
}

/// Exhaustive game-over scan. Expensive: every pseudo-legal move is applied,
/// check-tested, and undone. Callers should cache the result per position.
pub fn game_outcome(board: &mut Board) -> EngineResult<GameOutcome> {
    if has_legal_reply(board)? {
        return Ok(GameOutcome::NotOver);
    }

    Ok(if board.in_check() {
        GameOutcome::Checkmate
    } else {
        GameOutcome::Stalemate
    })
}

fn has_legal_reply(board: &mut Board) -> EngineResult<bool> {
    let mover = board.side_to_move;
    let moves = generate_pseudo_legal_moves(board);

    for mv in moves.iter() {
        board.make_move(mv)?;
        let legal = !king_in_check(board, mover);
        board.unmake_move();
        if legal {
            return Ok(true);
        }
    }

    Ok(false)
}
