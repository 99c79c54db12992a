//! ASCII board rendering for the demo binary and debugging.

use crate::board::board::Board;

/// Renders the board from Light's point of view, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8i8 {
        out.push_str(&format!("{} |", 8 - row));
        for col in 0..8i8 {
            match board.piece_at(row, col) {
                Some(piece) => out.push_str(&format!(" {}", piece.fen_char())),
                None => out.push_str(" ."),
            }
        }
        out.push('\n');
    }
    out.push_str("   ----------------\n");
    out.push_str("    a b c d e f g h\n");
    out
}
