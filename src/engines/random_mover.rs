//! Baseline opponent that plays a uniformly random legal move.

use rand::prelude::IndexedRandom;

use crate::errors::EngineResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_moves::generate_legal_moves;

/// Pick a random legal move, or `None` when the game is over.
pub fn choose_random_move(board: &mut Board) -> EngineResult<Option<Move>> {
    let legal = generate_legal_moves(board)?;
    let mut rng = rand::rng();
    Ok(legal.as_slice().choose(&mut rng).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::move_from;

    #[test]
    fn startpos_yields_a_legal_move() {
        let mut board = Board::new_game();
        let mv = choose_random_move(&mut board)
            .expect("generation should run")
            .expect("startpos has moves");

        let legal = generate_legal_moves(&mut board).expect("generation should run");
        assert!(legal.iter().any(|m| m == mv));
        assert!(move_from(mv) < 16, "white moves come from the first two ranks");
    }

    #[test]
    fn finished_game_yields_none() {
        let mut board =
            Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN parses");
        assert_eq!(
            choose_random_move(&mut board).expect("generation should run"),
            None
        );
    }
}
