//! Depth-limited negamax with fail-hard alpha-beta pruning.
//!
//! No transposition table, no move ordering, no iterative deepening; the
//! recursion depth is bounded by the undo stack, and depth values beyond its
//! capacity surface as `UndoStackFull`.

use crate::errors::EngineResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_moves::generate_legal_moves;
use crate::search::material::evaluate;

pub const INF: i32 = 1_000_000;

/// Search the position to `depth` plies and return its evaluation score
/// from the side to move's perspective.
pub fn search(board: &mut Board, depth: u32) -> EngineResult<i32> {
    negamax(board, depth, -INF, INF)
}

/// Search score normalized to white's perspective, for display surfaces
/// that report one number regardless of whose turn it is.
pub fn search_white_perspective(board: &mut Board, depth: u32) -> EngineResult<i32> {
    let score = search(board, depth)?;
    Ok(match board.side_to_move {
        Color::White => score,
        Color::Black => -score,
    })
}

pub fn negamax(board: &mut Board, depth: u32, mut alpha: i32, beta: i32) -> EngineResult<i32> {
    if depth == 0 {
        return Ok(evaluate(board));
    }

    let moves = generate_legal_moves(board)?;
    if moves.is_empty() {
        // Shallower mates score worse, so forced mates are preferred early.
        return Ok(if board.in_check() {
            -INF + depth as i32
        } else {
            0
        });
    }

    let mut best = -INF;

    for mv in moves.iter() {
        board.make_move(mv)?;
        let result = negamax(board, depth - 1, -beta, -alpha);
        board.unmake_move();

        let score = -result?;

        if score >= beta {
            return Ok(beta);
        }
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
    }

    Ok(best)
}
