//! Perft: the move-generation correctness oracle.
//!
//! Counts leaf nodes at exactly `depth` plies. Works over pseudo-legal moves
//! with an explicit own-king check test after each make, which avoids the
//! double apply/unmake that filtering through `generate_legal_moves` would
//! cost. Reference node counts for standard positions are the verification
//! contract.

use crate::errors::EngineResult;
use crate::game_state::board::Board;
use crate::move_generation::checks::king_in_check;
use crate::move_generation::pseudo_moves::generate_pseudo_legal_moves;
use crate::utils::algebraic::move_text;

/// Count leaf nodes of the game tree at `depth` plies.
pub fn perft(board: &mut Board, depth: u32) -> EngineResult<u64> {
    perft_inner(board, depth, true)
}

fn perft_inner(board: &mut Board, depth: u32, is_root: bool) -> EngineResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generate_pseudo_legal_moves(board);
    let mut nodes = 0u64;

    for mv in moves.iter() {
        let mover = board.side_to_move;
        board.make_move(mv)?;

        if !king_in_check(board, mover) {
            let subtree = perft_inner(board, depth - 1, false)?;
            nodes += subtree;

            if is_root {
                log::debug!("perft {}: {}", move_text(mv), subtree);
            }
        }

        board.unmake_move();
    }

    Ok(nodes)
}
