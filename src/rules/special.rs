//! Special-move derivation.
//!
//! Castling and en passant each imply one auxiliary board edit beyond the
//! primary piece relocation: the rook hop, or the removal of the captured
//! pawn. `auxiliary_edit` derives that edit from board contents so the
//! host can apply the primary move and the edit atomically.

use crate::board::board::Board;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::{PieceClass, PieceRecord};
use crate::rules::check::is_en_passant_shape;

/// The companion edit a special move implies, if any.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AuxiliaryEdit {
    /// Relocate the castling rook alongside the king.
    CastleRook {
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    },
    /// Remove the pawn captured en passant from this square.
    EnPassantCapture { row: i8, col: i8 },
}

/// Derives the auxiliary edit implied by `mv` on `board`, or `None` for
/// an ordinary move.
pub fn auxiliary_edit(
    board: &Board,
    mv: &MoveDescription,
    last_move: Option<&MoveDescription>,
) -> Option<AuxiliaryEdit> {
    if mv.piece.class == PieceClass::King && (mv.to_col - mv.from_col).abs() == 2 {
        // Kingside brings the h-rook beside the king; queenside the a-rook.
        let (rook_from, rook_to) = if mv.to_col > mv.from_col {
            (7, 5)
        } else {
            (0, 3)
        };
        return Some(AuxiliaryEdit::CastleRook {
            from_row: mv.from_row,
            from_col: rook_from,
            to_row: mv.from_row,
            to_col: rook_to,
        });
    }
    if is_en_passant_shape(board, mv, last_move) {
        return Some(AuxiliaryEdit::EnPassantCapture {
            row: mv.from_row,
            col: mv.to_col,
        });
    }
    None
}

/// A pawn reaching the farthest rank for its color.
pub fn is_promotion_move(mv: &MoveDescription) -> bool {
    mv.piece.class == PieceClass::Pawn && mv.to_row == mv.piece.team.promotion_row()
}

/// Composes the primary relocation with the auxiliary edit and, for a
/// promoting pawn, rewrites the destination as a queen. Search and the
/// demo binary advance positions through this helper; hosts that offer a
/// promotion choice apply the primary move and overwrite the destination
/// themselves.
pub fn apply_with_auxiliary(
    board: &Board,
    mv: &MoveDescription,
    last_move: Option<&MoveDescription>,
) -> Board {
    let edit = auxiliary_edit(board, mv, last_move);
    let mut next = board.apply_move(mv);
    match edit {
        Some(AuxiliaryEdit::CastleRook {
            from_row,
            from_col,
            to_row,
            to_col,
        }) => {
            if let Some(rook) = next.piece_at(from_row, from_col) {
                next.clear(from_row, from_col);
                next.place(to_row, to_col, rook);
            }
        }
        Some(AuxiliaryEdit::EnPassantCapture { row, col }) => {
            next.clear(row, col);
        }
        None => {}
    }
    if is_promotion_move(mv) {
        next.place(
            mv.to_row,
            mv.to_col,
            PieceRecord::new(PieceClass::Queen, mv.piece.team),
        );
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceTeam;

    #[test]
    fn castling_moves_king_and_rook_and_clears_both_origins() {
        let mut board = Board::empty();
        board.place(7, 4, PieceRecord::new(PieceClass::King, PieceTeam::Light));
        board.place(7, 7, PieceRecord::new(PieceClass::Rook, PieceTeam::Light));
        let mv = MoveDescription::describe(&board, 7, 4, 7, 6).unwrap();
        assert!(matches!(
            auxiliary_edit(&board, &mv, None),
            Some(AuxiliaryEdit::CastleRook {
                from_col: 7,
                to_col: 5,
                ..
            })
        ));
        let next = apply_with_auxiliary(&board, &mv, None);
        assert_eq!(next.piece_at(7, 4), None);
        assert_eq!(next.piece_at(7, 7), None);
        assert_eq!(
            next.piece_at(7, 6),
            Some(PieceRecord::new(PieceClass::King, PieceTeam::Light))
        );
        assert_eq!(
            next.piece_at(7, 5),
            Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
        );
    }

    #[test]
    fn queenside_castling_uses_the_a_rook() {
        let mut board = Board::empty();
        board.place(0, 4, PieceRecord::new(PieceClass::King, PieceTeam::Dark));
        board.place(0, 0, PieceRecord::new(PieceClass::Rook, PieceTeam::Dark));
        let mv = MoveDescription::describe(&board, 0, 4, 0, 2).unwrap();
        let next = apply_with_auxiliary(&board, &mv, None);
        assert_eq!(
            next.piece_at(0, 3),
            Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Dark))
        );
        assert_eq!(next.piece_at(0, 0), None);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut board = Board::empty();
        board.place(3, 4, PieceRecord::new(PieceClass::Pawn, PieceTeam::Light));
        board.place(3, 3, PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark));
        let double_step = MoveDescription {
            from_row: 1,
            from_col: 3,
            to_row: 3,
            to_col: 3,
            piece: PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark),
            captured_piece: None,
        };
        let mv = MoveDescription::describe(&board, 3, 4, 2, 3).unwrap();
        assert_eq!(
            auxiliary_edit(&board, &mv, Some(&double_step)),
            Some(AuxiliaryEdit::EnPassantCapture { row: 3, col: 3 })
        );
        let next = apply_with_auxiliary(&board, &mv, Some(&double_step));
        assert_eq!(next.piece_at(3, 3), None);
        assert_eq!(
            next.piece_at(2, 3),
            Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light))
        );
    }

    #[test]
    fn ordinary_capture_has_no_auxiliary_edit() {
        let mut board = Board::empty();
        board.place(3, 4, PieceRecord::new(PieceClass::Pawn, PieceTeam::Light));
        board.place(2, 3, PieceRecord::new(PieceClass::Knight, PieceTeam::Dark));
        let mv = MoveDescription::describe(&board, 3, 4, 2, 3).unwrap();
        assert_eq!(auxiliary_edit(&board, &mv, None), None);
    }

    #[test]
    fn promotion_rewrites_the_pawn_as_a_queen() {
        let mut board = Board::empty();
        board.place(1, 0, PieceRecord::new(PieceClass::Pawn, PieceTeam::Light));
        let mv = MoveDescription::describe(&board, 1, 0, 0, 0).unwrap();
        assert!(is_promotion_move(&mv));
        let next = apply_with_auxiliary(&board, &mv, None);
        assert_eq!(
            next.piece_at(0, 0),
            Some(PieceRecord::new(PieceClass::Queen, PieceTeam::Light))
        );
    }

    #[test]
    fn mid_board_pawn_move_is_not_a_promotion() {
        let mut board = Board::empty();
        board.place(4, 0, PieceRecord::new(PieceClass::Pawn, PieceTeam::Light));
        let mv = MoveDescription::describe(&board, 4, 0, 3, 0).unwrap();
        assert!(!is_promotion_move(&mv));
    }
}
