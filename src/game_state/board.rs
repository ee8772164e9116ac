//! Core board state and the make/unmake machinery.
//!
//! `Board` owns the piece bitboards, occupancy caches, turn/rights flags,
//! clocks, king-square caches, and the bounded undo stack. `make_move`
//! snapshots the full mutable state before touching it, so `unmake_move` is
//! a verbatim restore regardless of what the move did.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_rules::{
    rook_home_squares, KING_SIDE_CASTLE_FILE, QUEEN_SIDE_CASTLE_FILE, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::{
    both_rights, kingside_right, queenside_right, CastlingRights, Color, Move, PieceKind, Square,
};
use crate::game_state::undo_state::{UndoStack, UndoState};
use crate::move_generation::checks::king_in_check;
use crate::moves::move_descriptions::{
    is_capture_move, move_flag, move_from, move_to, promoted_piece, MoveFlag,
};
use crate::utils::algebraic::square_label;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Mutable chess position with bounded move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Piece bitboards, indexed `[color][piece_kind]`.
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches; valid only after `recalc_occupancy`.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // Half-moves since the last pawn move or capture (fifty-move tracking).
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // Cached king locations, kept in lockstep with the king bitboards.
    pub king_square: [Square; 2],

    pub undo_stack: UndoStack,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            king_square: [0; 2],
            undo_stack: UndoStack::new(),
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Color and kind of the piece on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = 1u64 << square;
        for color in [Color::White, Color::Black] {
            if self.occupancy_by_color[color.index()] & mask == 0 {
                continue;
            }
            for piece in PieceKind::ALL {
                if self.pieces[color.index()][piece.index()] & mask != 0 {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Rebuild the per-color and all-piece occupancy unions. Must run after
    /// any bitboard mutation before the caches are trusted again.
    pub fn recalc_occupancy(&mut self) {
        for color in [Color::White, Color::Black] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all =
            self.occupancy_by_color[Color::White.index()] | self.occupancy_by_color[Color::Black.index()];
    }

    /// Is the side to move currently in check?
    #[inline]
    pub fn in_check(&self) -> bool {
        king_in_check(self, self.side_to_move)
    }

    /// Apply `mv` to the board, pushing a restore point first.
    ///
    /// The move is trusted to be pseudo-legal; legality filtering happens in
    /// `move_generation::legal_moves`. Errors leave the board untouched.
    pub fn make_move(&mut self, mv: Move) -> EngineResult<()> {
        let from = move_from(mv);
        let to = move_to(mv);
        let mover = self.side_to_move;

        let moved_piece = match self.piece_on(from) {
            Some((color, piece)) if color == mover => piece,
            Some(_) => {
                return Err(EngineError::IllegalMove(format!(
                    "piece on {} does not belong to the side to move",
                    square_label(from)
                )))
            }
            None => {
                return Err(EngineError::IllegalMove(format!(
                    "no piece on {}",
                    square_label(from)
                )))
            }
        };

        let flag = move_flag(mv);
        let is_capture = is_capture_move(mv);

        // En-passant removes a pawn from a shifted square, so only ordinary
        // captures read the destination square here.
        let captured_piece = if is_capture && flag != MoveFlag::EnPassant {
            match self.piece_on(to) {
                Some((_, piece)) => Some(piece),
                None => {
                    return Err(EngineError::IllegalMove(format!(
                        "capture move targets empty square {}",
                        square_label(to)
                    )))
                }
            }
        } else {
            None
        };

        self.undo_stack.try_push(UndoState {
            mv,
            pieces: self.pieces,
            occupancy_by_color: self.occupancy_by_color,
            occupancy_all: self.occupancy_all,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            king_square: self.king_square,
        })?;

        let enemy = mover.opposite();
        let from_mask = 1u64 << from;
        let to_mask = 1u64 << to;

        // The en-passant target only survives the immediate reply.
        self.en_passant_square = None;
        if moved_piece == PieceKind::Pawn && from.abs_diff(to) == 16 {
            self.en_passant_square = Some(match mover {
                Color::White => to - 8,
                Color::Black => to + 8,
            });
        }

        match moved_piece {
            PieceKind::King => {
                self.castling_rights &= !both_rights(mover);
                self.king_square[mover.index()] = to;
            }
            PieceKind::Rook => {
                let (queenside_home, kingside_home) = rook_home_squares(mover);
                if from == queenside_home {
                    self.castling_rights &= !queenside_right(mover);
                } else if from == kingside_home {
                    self.castling_rights &= !kingside_right(mover);
                }
            }
            _ => {}
        }

        if let Some(promotion) = promoted_piece(mv) {
            self.pieces[mover.index()][PieceKind::Pawn.index()] &= !from_mask;
            self.pieces[mover.index()][promotion.index()] |= to_mask;
            if let Some(captured) = captured_piece {
                self.pieces[enemy.index()][captured.index()] &= !to_mask;
            }
        } else {
            self.pieces[mover.index()][moved_piece.index()] &= !from_mask;
            self.pieces[mover.index()][moved_piece.index()] |= to_mask;

            if flag == MoveFlag::EnPassant {
                let captured_square = match mover {
                    Color::White => to - 8,
                    Color::Black => to + 8,
                };
                self.pieces[enemy.index()][PieceKind::Pawn.index()] &= !(1u64 << captured_square);
            } else if let Some(captured) = captured_piece {
                self.pieces[enemy.index()][captured.index()] &= !to_mask;
            } else if flag == MoveFlag::Castle {
                if to % 8 == KING_SIDE_CASTLE_FILE {
                    self.shuttle_rook(mover, from + 3, from + 1);
                } else if to % 8 == QUEEN_SIDE_CASTLE_FILE {
                    self.shuttle_rook(mover, from - 4, from - 1);
                }
            }
        }

        if moved_piece == PieceKind::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = enemy;
        self.recalc_occupancy();

        Ok(())
    }

    /// Pop the most recent restore point and overwrite the board verbatim.
    /// A no-op when no moves have been applied.
    pub fn unmake_move(&mut self) {
        let Some(undo) = self.undo_stack.pop() else {
            return;
        };

        self.pieces = undo.pieces;
        self.occupancy_by_color = undo.occupancy_by_color;
        self.occupancy_all = undo.occupancy_all;
        self.side_to_move = undo.side_to_move;
        self.castling_rights = undo.castling_rights;
        self.en_passant_square = undo.en_passant_square;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.king_square = undo.king_square;
    }

    fn shuttle_rook(&mut self, color: Color, from: Square, to: Square) {
        self.pieces[color.index()][PieceKind::Rook.index()] &= !(1u64 << from);
        self.pieces[color.index()][PieceKind::Rook.index()] |= 1u64 << to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{pack_move, MoveFlag};

    #[test]
    fn make_then_unmake_restores_the_exact_position() {
        let mut board = Board::new_game();
        let before = board.clone();

        let e2e4 = pack_move(12, 28, false, MoveFlag::Quiet);
        board.make_move(e2e4).expect("e2e4 should apply");
        assert_ne!(board, before);

        board.unmake_move();
        assert_eq!(board, before);
    }

    #[test]
    fn double_pawn_push_sets_the_en_passant_target() {
        let mut board = Board::new_game();

        let e2e4 = pack_move(12, 28, false, MoveFlag::Quiet);
        board.make_move(e2e4).expect("e2e4 should apply");
        assert_eq!(board.en_passant_square, Some(20));

        let g8f6 = pack_move(62, 45, false, MoveFlag::Quiet);
        board.make_move(g8f6).expect("g8f6 should apply");
        assert_eq!(board.en_passant_square, None);
    }

    #[test]
    fn king_move_revokes_both_castling_rights() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("castle FEN parses");

        let e1e2 = pack_move(4, 12, false, MoveFlag::Quiet);
        board.make_move(e1e2).expect("king step should apply");

        assert_eq!(board.castling_rights & both_rights(Color::White), 0);
        assert_eq!(
            board.castling_rights & both_rights(Color::Black),
            both_rights(Color::Black)
        );
        assert_eq!(board.king_square[Color::White.index()], 12);
    }

    #[test]
    fn rook_move_revokes_only_its_own_right() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("castle FEN parses");

        let a1a2 = pack_move(0, 8, false, MoveFlag::Quiet);
        board.make_move(a1a2).expect("rook step should apply");

        assert_eq!(board.castling_rights & queenside_right(Color::White), 0);
        assert_ne!(board.castling_rights & kingside_right(Color::White), 0);
    }

    #[test]
    fn kingside_castle_shuttles_the_rook() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("castle FEN parses");
        let before = board.clone();

        let castle = pack_move(4, 6, false, MoveFlag::Castle);
        board.make_move(castle).expect("castle should apply");

        assert_eq!(board.piece_on(6), Some((Color::White, PieceKind::King)));
        assert_eq!(board.piece_on(5), Some((Color::White, PieceKind::Rook)));
        assert_eq!(board.piece_on(7), None);
        assert_eq!(board.piece_on(4), None);

        board.unmake_move();
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_capture_removes_the_bypassing_pawn() {
        let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("en-passant FEN parses");
        let before = board.clone();

        let exd6 = pack_move(36, 43, true, MoveFlag::EnPassant);
        board.make_move(exd6).expect("en passant should apply");

        assert_eq!(board.piece_on(43), Some((Color::White, PieceKind::Pawn)));
        assert_eq!(board.piece_on(35), None, "captured pawn is gone");

        board.unmake_move();
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_with_capture_swaps_both_pieces() {
        let mut board =
            Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("promotion FEN parses");
        let before = board.clone();

        let axb8_queen = pack_move(48, 57, true, MoveFlag::PromoteQueen);
        board.make_move(axb8_queen).expect("promotion should apply");

        assert_eq!(board.piece_on(57), Some((Color::White, PieceKind::Queen)));
        assert_eq!(
            board.pieces[Color::White.index()][PieceKind::Pawn.index()],
            0
        );
        assert_eq!(
            board.pieces[Color::Black.index()][PieceKind::Knight.index()],
            0
        );

        board.unmake_move();
        assert_eq!(board, before);
    }

    #[test]
    fn halfmove_clock_resets_on_pawn_moves_and_counts_otherwise() {
        let mut board = Board::new_game();

        let b1c3 = pack_move(1, 18, false, MoveFlag::Quiet);
        board.make_move(b1c3).expect("knight move should apply");
        assert_eq!(board.halfmove_clock, 1);

        let e7e5 = pack_move(52, 36, false, MoveFlag::Quiet);
        board.make_move(e7e5).expect("pawn move should apply");
        assert_eq!(board.halfmove_clock, 0);
    }

    #[test]
    fn unmake_on_fresh_board_is_a_no_op() {
        let mut board = Board::new_game();
        let before = board.clone();
        board.unmake_move();
        assert_eq!(board, before);
    }

    #[test]
    fn make_move_from_empty_square_is_rejected() {
        let mut board = Board::new_game();
        let bogus = pack_move(20, 28, false, MoveFlag::Quiet);
        assert!(matches!(
            board.make_move(bogus),
            Err(EngineError::IllegalMove(_))
        ));
        assert!(board.undo_stack.is_empty());
    }
}
