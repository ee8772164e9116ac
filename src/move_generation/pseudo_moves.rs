//! Pseudo-legal move generation, one generator per piece kind.
//!
//! Generators obey piece movement and occupancy only; self-check filtering
//! lives in `legal_moves`. Castling is the single exception and already
//! refuses to pass through or land on attacked squares. Dispatch goes
//! through a per-kind function table rather than branching at every call
//! site.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home_square, pawn_start_rank, promotion_rank};
use crate::game_state::chess_types::{kingside_right, queenside_right, Color, PieceKind, Square};
use crate::move_generation::checks::is_square_attacked;
use crate::move_generation::move_list::MoveList;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::{pack_move, MoveFlag};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

type PieceMoveGenerator = fn(&Board, Square, &mut MoveList);

// Indexed by `PieceKind::index()`.
const PIECE_GENERATORS: [PieceMoveGenerator; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

/// All pseudo-legal moves for the side to move.
pub fn generate_pseudo_legal_moves(board: &Board) -> MoveList {
    let mut out = MoveList::new();
    let mut own = board.occupancy_by_color[board.side_to_move.index()];

    while own != 0 {
        let from = own.trailing_zeros() as Square;
        if let Some((_, kind)) = board.piece_on(from) {
            PIECE_GENERATORS[kind.index()](board, from, &mut out);
        }
        own &= own - 1;
    }

    out
}

pub fn generate_pawn_moves(board: &Board, from: Square, out: &mut MoveList) {
    let side = board.side_to_move;
    let enemy_occupancy = board.occupancy_by_color[side.opposite().index()];
    let empty = !board.occupancy_all;
    let rank = from / 8;
    let promo_rank = promotion_rank(side);

    // Forward pushes.
    let one_step = match side {
        Color::White => from.checked_add(8).filter(|to| *to < 64),
        Color::Black => from.checked_sub(8),
    };
    if let Some(to) = one_step {
        if empty & (1u64 << to) != 0 {
            if to / 8 == promo_rank {
                push_promotions(from, to, false, out);
            } else {
                out.push(pack_move(from, to, false, MoveFlag::Quiet));

                if rank == pawn_start_rank(side) {
                    let two_step = match side {
                        Color::White => from + 16,
                        Color::Black => from - 16,
                    };
                    if empty & (1u64 << two_step) != 0 {
                        out.push(pack_move(from, two_step, false, MoveFlag::Quiet));
                    }
                }
            }
        }
    }

    // Diagonal captures, masked by the attack table so edge pawns never wrap.
    let mut targets = pawn_attacks(side, from) & enemy_occupancy;
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        if to / 8 == promo_rank {
            push_promotions(from, to, true, out);
        } else {
            out.push(pack_move(from, to, true, MoveFlag::Capture));
        }
        targets &= targets - 1;
    }

    // En-passant: the attack mask already encodes the adjacent-file and
    // adjacent-rank constraints.
    if let Some(target) = board.en_passant_square {
        if pawn_attacks(side, from) & (1u64 << target) != 0 {
            out.push(pack_move(from, target, true, MoveFlag::EnPassant));
        }
    }
}

fn push_promotions(from: Square, to: Square, is_capture: bool, out: &mut MoveList) {
    for flag in [
        MoveFlag::PromoteQueen,
        MoveFlag::PromoteRook,
        MoveFlag::PromoteBishop,
        MoveFlag::PromoteKnight,
    ] {
        out.push(pack_move(from, to, is_capture, flag));
    }
}

pub fn generate_knight_moves(board: &Board, from: Square, out: &mut MoveList) {
    let own = board.occupancy_by_color[board.side_to_move.index()];
    push_stepper_moves(board, from, knight_attacks(from) & !own, out);
}

pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut MoveList) {
    let own = board.occupancy_by_color[board.side_to_move.index()];
    push_stepper_moves(board, from, bishop_attacks(from, board.occupancy_all) & !own, out);
}

pub fn generate_rook_moves(board: &Board, from: Square, out: &mut MoveList) {
    let own = board.occupancy_by_color[board.side_to_move.index()];
    push_stepper_moves(board, from, rook_attacks(from, board.occupancy_all) & !own, out);
}

pub fn generate_queen_moves(board: &Board, from: Square, out: &mut MoveList) {
    let own = board.occupancy_by_color[board.side_to_move.index()];
    push_stepper_moves(board, from, queen_attacks(from, board.occupancy_all) & !own, out);
}

pub fn generate_king_moves(board: &Board, from: Square, out: &mut MoveList) {
    let side = board.side_to_move;
    let own = board.occupancy_by_color[side.index()];
    push_stepper_moves(board, from, king_attacks(from) & !own, out);

    // Castling only ever originates from the king's home square; rights
    // without the king there denote a hand-crafted setup we refuse to
    // castle from.
    if from != king_home_square(side) {
        return;
    }

    let enemy = side.opposite();
    let rooks = board.pieces[side.index()][PieceKind::Rook.index()];

    if board.castling_rights & kingside_right(side) != 0 {
        let transit_empty = board.occupancy_all & ((1u64 << (from + 1)) | (1u64 << (from + 2))) == 0;
        let rook_present = rooks & (1u64 << (from + 3)) != 0;

        if transit_empty
            && rook_present
            && !is_square_attacked(board, from, enemy)
            && !is_square_attacked(board, from + 1, enemy)
            && !is_square_attacked(board, from + 2, enemy)
        {
            out.push(pack_move(from, from + 2, false, MoveFlag::Castle));
        }
    }

    if board.castling_rights & queenside_right(side) != 0 {
        let transit_empty = board.occupancy_all
            & ((1u64 << (from - 1)) | (1u64 << (from - 2)) | (1u64 << (from - 3)))
            == 0;
        let rook_present = rooks & (1u64 << (from - 4)) != 0;

        if transit_empty
            && rook_present
            && !is_square_attacked(board, from, enemy)
            && !is_square_attacked(board, from - 1, enemy)
            && !is_square_attacked(board, from - 2, enemy)
        {
            out.push(pack_move(from, from - 2, false, MoveFlag::Castle));
        }
    }
}

/// Emit one move per set bit in `targets`: a capture when the destination
/// holds an enemy piece, a quiet move otherwise.
fn push_stepper_moves(board: &Board, from: Square, targets: u64, out: &mut MoveList) {
    let enemy_occupancy = board.occupancy_by_color[board.side_to_move.opposite().index()];

    let mut remaining = targets;
    while remaining != 0 {
        let to = remaining.trailing_zeros() as Square;
        if enemy_occupancy & (1u64 << to) != 0 {
            out.push(pack_move(from, to, true, MoveFlag::Capture));
        } else {
            out.push(pack_move(from, to, false, MoveFlag::Quiet));
        }
        remaining &= remaining - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{move_flag, move_to};

    #[test]
    fn startpos_has_twenty_pseudo_legal_moves() {
        let board = Board::new_game();
        assert_eq!(generate_pseudo_legal_moves(&board).len(), 20);
    }

    #[test]
    fn promotion_square_yields_four_moves_per_target() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parses");
        let mut out = MoveList::new();
        generate_pawn_moves(&board, 48, &mut out);

        assert_eq!(out.len(), 4);
        assert!(out
            .iter()
            .all(|mv| move_flag(mv).promotion_piece().is_some()));
    }

    #[test]
    fn both_castles_are_emitted_from_an_open_home_rank() {
        let board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN parses");
        let moves = generate_pseudo_legal_moves(&board);

        let castles: Vec<_> = moves
            .iter()
            .filter(|mv| move_flag(*mv) == MoveFlag::Castle)
            .collect();
        assert_eq!(castles.len(), 2);
    }

    #[test]
    fn castle_through_an_attacked_square_is_suppressed() {
        // Black rook on f2 covers f1, the kingside transit square.
        let board =
            Board::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1").expect("FEN parses");
        let moves = generate_pseudo_legal_moves(&board);

        let castle_targets: Vec<_> = moves
            .iter()
            .filter(|mv| move_flag(*mv) == MoveFlag::Castle)
            .map(move_to)
            .collect();
        assert_eq!(castle_targets, vec![2], "only the queenside castle survives");
    }

    #[test]
    fn en_passant_capture_is_generated_for_the_adjacent_pawn_only() {
        let board =
            Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN parses");
        let moves = generate_pseudo_legal_moves(&board);

        let ep: Vec<_> = moves
            .iter()
            .filter(|mv| move_flag(*mv) == MoveFlag::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(move_to(ep[0]), 43);
    }
}
