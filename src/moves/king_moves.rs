//! Precomputed king attack table.

use crate::game_state::chess_types::Square;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut dr = -1;
        while dr <= 1 {
            let mut df = -1;
            while df <= 1 {
                if dr != 0 || df != 0 {
                    attacks |= set_if_valid(file + df, rank + dr);
                }
                df += 1;
            }
            dr += 1;
        }

        table[sq] = attacks;
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
    use super::king_attacks;

    #[test]
    fn corner_king_has_three_targets() {
        assert_eq!(king_attacks(0).count_ones(), 3);
    }

    #[test]
    fn central_king_has_eight_targets() {
        let e5 = 36u8;
        assert_eq!(king_attacks(e5).count_ones(), 8);
    }

    #[test]
    fn h_file_king_does_not_wrap_to_a_file() {
        let h5 = 39u8;
        let a_file = 0x0101_0101_0101_0101u64;
        assert_eq!(king_attacks(h5) & a_file, 0);
    }
}
