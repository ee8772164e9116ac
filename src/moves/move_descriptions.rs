//! Packed-move codec.
//!
//! A move is a `u16`: bits 0-5 hold the from-square, 6-11 the to-square,
//! bit 12 the capture flag, and bits 13-15 a special-move tag. The codec is
//! bijective over all valid field combinations.

use crate::game_state::chess_types::{Move, PieceKind, Square};

const FROM_SHIFT: u16 = 0;
const TO_SHIFT: u16 = 6;
const CAPTURE_SHIFT: u16 = 12;
const FLAG_SHIFT: u16 = 13;

const SQUARE_MASK: u16 = 0x3F;
const FLAG_MASK: u16 = 0x7;

/// Special-move tag. Exactly one tag applies to any move; plain captures
/// carry the `Capture` tag alongside the capture bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFlag {
    Quiet,
    Capture,
    EnPassant,
    Castle,
    PromoteQueen,
    PromoteRook,
    PromoteBishop,
    PromoteKnight,
}

impl MoveFlag {
    pub const ALL: [MoveFlag; 8] = [
        MoveFlag::Quiet,
        MoveFlag::Capture,
        MoveFlag::EnPassant,
        MoveFlag::Castle,
        MoveFlag::PromoteQueen,
        MoveFlag::PromoteRook,
        MoveFlag::PromoteBishop,
        MoveFlag::PromoteKnight,
    ];

    #[inline]
    pub const fn bits(self) -> u16 {
        match self {
            MoveFlag::Quiet => 0,
            MoveFlag::Capture => 1,
            MoveFlag::EnPassant => 2,
            MoveFlag::Castle => 3,
            MoveFlag::PromoteQueen => 4,
            MoveFlag::PromoteRook => 5,
            MoveFlag::PromoteBishop => 6,
            MoveFlag::PromoteKnight => 7,
        }
    }

    #[inline]
    pub fn from_bits(bits: u16) -> MoveFlag {
        match bits & FLAG_MASK {
            0 => MoveFlag::Quiet,
            1 => MoveFlag::Capture,
            2 => MoveFlag::EnPassant,
            3 => MoveFlag::Castle,
            4 => MoveFlag::PromoteQueen,
            5 => MoveFlag::PromoteRook,
            6 => MoveFlag::PromoteBishop,
            // Masked to three bits above.
            _ => MoveFlag::PromoteKnight,
        }
    }

    /// Piece created on arrival, if this tag is a promotion.
    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            MoveFlag::PromoteQueen => Some(PieceKind::Queen),
            MoveFlag::PromoteRook => Some(PieceKind::Rook),
            MoveFlag::PromoteBishop => Some(PieceKind::Bishop),
            MoveFlag::PromoteKnight => Some(PieceKind::Knight),
            _ => None,
        }
    }
}

#[inline]
pub fn pack_move(from: Square, to: Square, is_capture: bool, flag: MoveFlag) -> Move {
    (from as u16 & SQUARE_MASK) << FROM_SHIFT
        | (to as u16 & SQUARE_MASK) << TO_SHIFT
        | (is_capture as u16) << CAPTURE_SHIFT
        | flag.bits() << FLAG_SHIFT
}

#[inline]
pub fn move_from(mv: Move) -> Square {
    ((mv >> FROM_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_to(mv: Move) -> Square {
    ((mv >> TO_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn is_capture_move(mv: Move) -> bool {
    (mv >> CAPTURE_SHIFT) & 1 != 0
}

#[inline]
pub fn move_flag(mv: Move) -> MoveFlag {
    MoveFlag::from_bits(mv >> FLAG_SHIFT)
}

/// Promotion target encoded in the move, `None` for non-promotions.
#[inline]
pub fn promoted_piece(mv: Move) -> Option<PieceKind> {
    move_flag(mv).promotion_piece()
}
