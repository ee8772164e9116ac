//! Queen attacks: union of the rook and bishop resolvers.

use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;

    #[test]
    fn open_board_central_queen_sees_twenty_seven_squares() {
        let d4 = 27u8;
        assert_eq!(queen_attacks(d4, 0).count_ones(), 27);
    }
}
