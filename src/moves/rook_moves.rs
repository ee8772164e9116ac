//! On-demand rook attack resolution.
//!
//! Rays are walked one square at a time in file/rank coordinates against the
//! current occupancy. The first occupied square terminates the ray and is
//! included in the attack set. No precomputed blocker lookup is used;
//! correctness over speed.

use crate::game_state::chess_types::Square;

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    let sq = square as i32;

    trace_ray(sq, 0, 1, occupancy)
        | trace_ray(sq, 0, -1, occupancy)
        | trace_ray(sq, 1, 0, occupancy)
        | trace_ray(sq, -1, 0, occupancy)
}

pub(crate) fn trace_ray(square: i32, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if occupancy & bit != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}
