//! Check detection and move simulation.

use crate::board::board::Board;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::{PieceClass, PieceTeam};
use crate::rules::attacks::is_square_attacked;

/// True when `team`'s king currently stands on an attacked square.
/// Assumes a well-formed board with exactly one king per team; a board
/// with no king for `team` reports no check.
pub fn is_king_in_check(board: &Board, team: PieceTeam) -> bool {
    match board.find_king(team) {
        Some((row, col)) => is_square_attacked(board, row, col, team),
        None => false,
    }
}

/// Simulates the move on a scratch board and asks whether `king_team`'s
/// king is attacked afterwards. This is a pure simulation, not a legality
/// gate: it answers the same way for legal and illegal moves alike, and
/// it is the filter that turns pseudo-legal moves into legal ones.
///
/// `last_move` lets the simulation recognize an en-passant capture so the
/// captured pawn is lifted off the scratch board too; with `None` the
/// simulation is exactly `apply_move` followed by `is_king_in_check`.
pub fn would_be_in_check(
    board: &Board,
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
    king_team: PieceTeam,
    last_move: Option<&MoveDescription>,
) -> bool {
    let mv = match MoveDescription::describe(board, from_row, from_col, to_row, to_col) {
        Some(mv) => mv,
        None => return is_king_in_check(board, king_team),
    };
    let mut next = board.apply_move(&mv);
    if is_en_passant_shape(board, &mv, last_move) {
        next.clear(mv.from_row, mv.to_col);
    }
    is_king_in_check(&next, king_team)
}

/// A pawn stepping diagonally onto an empty square right after the
/// opposing pawn double-stepped past it.
pub(crate) fn is_en_passant_shape(
    board: &Board,
    mv: &MoveDescription,
    last_move: Option<&MoveDescription>,
) -> bool {
    if mv.piece.class != PieceClass::Pawn
        || mv.from_col == mv.to_col
        || board.piece_at(mv.to_row, mv.to_col).is_some()
    {
        return false;
    }
    match last_move {
        Some(last) => {
            last.piece.class == PieceClass::Pawn
                && last.piece.team != mv.piece.team
                && last.is_double_pawn_push()
                && last.to_row == mv.from_row
                && last.to_col == mv.to_col
        }
        None => false,
    }
}
