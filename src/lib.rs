//! Crate root module declarations for the Rowan chess engine.
//!
//! This file exposes the board model, move generation, legality checking,
//! search, and utility helpers so the console binary, tests, and benches can
//! import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod checks;
    pub mod legal_moves;
    pub mod move_list;
    pub mod perft;
    pub mod pseudo_moves;
}

pub mod search {
    pub mod material;
    pub mod negamax;
}

pub mod engines {
    pub mod random_mover;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}
