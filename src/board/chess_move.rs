//! Move descriptors.
//!
//! A `MoveDescription` records a single ply: source and destination
//! coordinates, the moved piece, and the piece sitting on the destination
//! square (if any) at the time the move was described. Special-move side
//! effects (castling rook relocation, en-passant pawn removal, promotion)
//! are not encoded here; they are derived from board contents at apply
//! time by `rules::special`.

use std::fmt;

use crate::board::board::Board;
use crate::board::piece::{PieceClass, PieceRecord};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveDescription {
    pub from_row: i8,
    pub from_col: i8,
    pub to_row: i8,
    pub to_col: i8,
    pub piece: PieceRecord,
    pub captured_piece: Option<PieceRecord>,
}

impl MoveDescription {
    /// Builds a descriptor from board contents. Returns None when the
    /// source square is empty or either coordinate is out of range.
    pub fn describe(
        board: &Board,
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    ) -> Option<Self> {
        if !Board::in_bounds(from_row, from_col) || !Board::in_bounds(to_row, to_col) {
            return None;
        }
        let piece = board.piece_at(from_row, from_col)?;
        Some(MoveDescription {
            from_row,
            from_col,
            to_row,
            to_col,
            piece,
            captured_piece: board.piece_at(to_row, to_col),
        })
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// A pawn advancing two rows in one ply. The trigger for en-passant
    /// eligibility on the opponent's next move.
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.class == PieceClass::Pawn && (self.to_row - self.from_row).abs() == 2
    }
}

fn square_name(row: i8, col: i8) -> String {
    let file = (b'a' + col as u8) as char;
    let rank = 8 - row;
    format!("{}{}", file, rank)
}

impl fmt::Display for MoveDescription {
    /// Long-algebraic rendering, e.g. "e2e4".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_name(self.from_row, self.from_col),
            square_name(self.to_row, self.to_col)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceTeam;

    #[test]
    fn describe_records_capture_target() {
        let mut board = Board::empty();
        board.place(4, 4, PieceRecord::new(PieceClass::Rook, PieceTeam::Light));
        board.place(4, 7, PieceRecord::new(PieceClass::Knight, PieceTeam::Dark));
        let mv = MoveDescription::describe(&board, 4, 4, 4, 7).unwrap();
        assert!(mv.is_capture());
        assert_eq!(
            mv.captured_piece,
            Some(PieceRecord::new(PieceClass::Knight, PieceTeam::Dark))
        );
    }

    #[test]
    fn describe_rejects_empty_source_and_out_of_range() {
        let board = Board::standard_start();
        assert!(MoveDescription::describe(&board, 4, 4, 5, 5).is_none());
        assert!(MoveDescription::describe(&board, 6, 4, 8, 4).is_none());
    }

    #[test]
    fn display_uses_long_algebraic() {
        let board = Board::standard_start();
        let mv = MoveDescription::describe(&board, 6, 4, 4, 4).unwrap();
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn double_pawn_push_is_flagged() {
        let board = Board::standard_start();
        let double = MoveDescription::describe(&board, 1, 3, 3, 3).unwrap();
        let single = MoveDescription::describe(&board, 1, 3, 2, 3).unwrap();
        assert!(double.is_double_pawn_push());
        assert!(!single.is_double_pawn_push());
    }
}
