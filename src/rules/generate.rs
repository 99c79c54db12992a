//! Legal move enumeration.
//!
//! Full-width enumeration: every origin holding a piece of the side to
//! move is paired with every destination, filtered first by the
//! pseudo-legal validator and then by the check simulation. Worst case is
//! 64x64 probes per call, which is fine at human-move cadence and is the
//! dominant cost inside search.

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::PieceTeam;
use crate::rules::check::would_be_in_check;
use crate::rules::movement::is_valid_move;

/// Every legal move for `team` on this board.
pub fn generate_all_valid_moves(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> Vec<MoveDescription> {
    let mut moves = Vec::new();
    for (from_row, from_col, piece) in board.occupied_squares() {
        if piece.team != team {
            continue;
        }
        for to_row in 0..8i8 {
            for to_col in 0..8i8 {
                if !is_valid_move(board, from_row, from_col, to_row, to_col, rights, last_move) {
                    continue;
                }
                if would_be_in_check(board, from_row, from_col, to_row, to_col, team, last_move) {
                    continue;
                }
                if let Some(mv) =
                    MoveDescription::describe(board, from_row, from_col, to_row, to_col)
                {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}

/// True when `team` has at least one legal move. Same filters as
/// `generate_all_valid_moves` but returns at the first hit, which is what
/// the classifier usually needs.
pub fn has_any_valid_move(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> bool {
    for (from_row, from_col, piece) in board.occupied_squares() {
        if piece.team != team {
            continue;
        }
        for to_row in 0..8i8 {
            for to_col in 0..8i8 {
                if is_valid_move(board, from_row, from_col, to_row, to_col, rights, last_move)
                    && !would_be_in_check(board, from_row, from_col, to_row, to_col, team, last_move)
                {
                    return true;
                }
            }
        }
    }
    false
}
