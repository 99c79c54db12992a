//! The mailbox board representation.
//!
//! A `Board` is a plain 8x8 grid of optional pieces, row 0 being Dark's
//! back rank and column 0 being file 'a'. Boards are cheap `Copy` values:
//! every transformation produces a fresh board, so speculative search can
//! branch from the same parent position any number of times without the
//! real game state ever being touched.

use crate::board::chess_move::MoveDescription;
use crate::board::piece::{PieceClass, PieceRecord, PieceTeam};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard chess starting position.
    pub fn standard_start() -> Self {
        let back_rank = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::Queen,
            PieceClass::King,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];
        let mut board = Board::empty();
        for (col, class) in back_rank.into_iter().enumerate() {
            board.place(0, col as i8, PieceRecord::new(class, PieceTeam::Dark));
            board.place(1, col as i8, PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark));
            board.place(6, col as i8, PieceRecord::new(PieceClass::Pawn, PieceTeam::Light));
            board.place(7, col as i8, PieceRecord::new(class, PieceTeam::Light));
        }
        board
    }

    pub fn in_bounds(row: i8, col: i8) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    /// Returns the piece on the square, or None when empty or out of range.
    pub fn piece_at(&self, row: i8, col: i8) -> Option<PieceRecord> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        self.squares[row as usize][col as usize]
    }

    /// Construction-time setter. Boards handed out to rules or search are
    /// never mutated in place; transformations go through `apply_move`.
    pub fn place(&mut self, row: i8, col: i8, piece: PieceRecord) {
        if Self::in_bounds(row, col) {
            self.squares[row as usize][col as usize] = Some(piece);
        }
    }

    pub fn clear(&mut self, row: i8, col: i8) {
        if Self::in_bounds(row, col) {
            self.squares[row as usize][col as usize] = None;
        }
    }

    /// Returns a new board with the moved piece relocated and the source
    /// square cleared. Castling rook relocation, en-passant pawn removal,
    /// and promotion are deliberately not handled here; those auxiliary
    /// edits are derived separately and composed by the caller.
    pub fn apply_move(&self, mv: &MoveDescription) -> Board {
        let mut next = *self;
        next.clear(mv.from_row, mv.from_col);
        next.place(mv.to_row, mv.to_col, mv.piece);
        next
    }

    /// Locates the king of the given team. Well-formed boards hold exactly
    /// one king per team; that invariant is a construction-side
    /// responsibility and is not checked here.
    pub fn find_king(&self, team: PieceTeam) -> Option<(i8, i8)> {
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = self.piece_at(row, col) {
                    if piece.class == PieceClass::King && piece.team == team {
                        return Some((row, col));
                    }
                }
            }
        }
        None
    }

    /// Iterate all occupied squares as (row, col, piece).
    pub fn occupied_squares(&self) -> impl Iterator<Item = (i8, i8, PieceRecord)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                self.piece_at(row, col).map(|piece| (row, col, piece))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_start_has_thirty_two_pieces() {
        let board = Board::standard_start();
        assert_eq!(board.occupied_squares().count(), 32);
        assert_eq!(
            board.piece_at(7, 4),
            Some(PieceRecord::new(PieceClass::King, PieceTeam::Light))
        );
        assert_eq!(
            board.piece_at(0, 3),
            Some(PieceRecord::new(PieceClass::Queen, PieceTeam::Dark))
        );
    }

    #[test]
    fn apply_move_relocates_and_clears_source() {
        let board = Board::standard_start();
        let pawn = board.piece_at(6, 4).unwrap();
        let mv = MoveDescription {
            from_row: 6,
            from_col: 4,
            to_row: 4,
            to_col: 4,
            piece: pawn,
            captured_piece: None,
        };
        let next = board.apply_move(&mv);
        assert_eq!(next.piece_at(6, 4), None);
        assert_eq!(next.piece_at(4, 4), Some(pawn));
        // The parent board is untouched.
        assert_eq!(board.piece_at(6, 4), Some(pawn));
        assert_eq!(board.piece_at(4, 4), None);
    }

    #[test]
    fn piece_at_out_of_range_is_none() {
        let board = Board::standard_start();
        assert_eq!(board.piece_at(-1, 0), None);
        assert_eq!(board.piece_at(0, 8), None);
    }

    #[test]
    fn find_king_locates_both_kings() {
        let board = Board::standard_start();
        assert_eq!(board.find_king(PieceTeam::Light), Some((7, 4)));
        assert_eq!(board.find_king(PieceTeam::Dark), Some((0, 4)));
    }
}
