//! On-demand bishop attack resolution over the four diagonal rays.

use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::trace_ray;

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    let sq = square as i32;

    trace_ray(sq, 1, 1, occupancy)
        | trace_ray(sq, -1, 1, occupancy)
        | trace_ray(sq, 1, -1, occupancy)
        | trace_ray(sq, -1, -1, occupancy)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn open_board_corner_bishop_sees_the_long_diagonal() {
        let a1 = 0u8;
        let attacks = bishop_attacks(a1, 0);
        assert_eq!(attacks.count_ones(), 7);
        assert_ne!(attacks & (1u64 << 63), 0);
    }

    #[test]
    fn blocker_terminates_diagonal_inclusively() {
        let c1 = 2u8;
        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0, "f4 lies behind the blocker");
    }
}
