//! ASCII board rendering for the console interface.

use crate::game_state::board::Board;

/// Render the board as an 8x8 grid, rank 8 on top, with file and rank
/// labels. Pieces use their FEN letters and empty squares a dot.
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(256);

    for rank in (0..8u8).rev() {
        out.push((b'1' + rank) as char);
        out.push(' ');

        for file in 0..8u8 {
            let ch = match board.piece_on(rank * 8 + file) {
                Some((color, piece)) => piece.fen_char(color),
                None => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }

    out.push_str("   a b c d e f g h\n");
    out
}
