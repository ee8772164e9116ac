//! Precomputed pawn attack tables, one per color.
//!
//! Built at compile time by walking all 64 squares and validating file/rank
//! deltas, so a-file and h-file pawns never wrap across the board edge.

use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(true);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(false);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(white: bool) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let forward = if white { 1 } else { -1 };

        table[sq] = set_if_valid(file - 1, rank + forward) | set_if_valid(file + 1, rank + forward);
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << ((rank as usize) * 8 + (file as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_pawn_on_a2_attacks_only_b3() {
        let a2 = 8u8;
        assert_eq!(pawn_attacks(Color::White, a2), 1u64 << 17);
    }

    #[test]
    fn black_pawn_on_h7_attacks_only_g6() {
        let h7 = 55u8;
        assert_eq!(pawn_attacks(Color::Black, h7), 1u64 << 46);
    }

    #[test]
    fn central_pawns_attack_two_squares() {
        let d4 = 27u8;
        assert_eq!(pawn_attacks(Color::White, d4), (1u64 << 34) | (1u64 << 36));
        assert_eq!(pawn_attacks(Color::Black, d4), (1u64 << 18) | (1u64 << 20));
    }
}
