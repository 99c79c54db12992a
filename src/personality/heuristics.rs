//! Shared evaluation heuristics used by the personality modifiers.

use crate::board::board::Board;
use crate::board::piece::{PieceClass, PieceTeam};
use crate::rules::attacks::is_square_attacked;
use crate::search::scoring::Score;

/// The four central squares (d4, d5, e4, e5).
pub const CENTER_SQUARES: [(i8, i8); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// True when an opposing piece attacks the square holding `team`'s piece.
pub fn is_attacked_by_opponent(board: &Board, row: i8, col: i8, team: PieceTeam) -> bool {
    is_square_attacked(board, row, col, team)
}

/// True when a friendly piece covers the square, so a capture there could
/// be answered by a recapture.
pub fn is_protected_by_own_side(board: &Board, row: i8, col: i8, team: PieceTeam) -> bool {
    is_square_attacked(board, row, col, team.opponent())
}

/// Bonus for occupying the center, per piece.
pub fn center_occupation(board: &Board, team: PieceTeam) -> Score {
    let mut score: Score = 0.0;
    for (row, col) in CENTER_SQUARES {
        if let Some(piece) = board.piece_at(row, col) {
            if piece.team == team {
                score += 1.0;
            }
        }
    }
    score
}

/// Count of own pawns on the three squares directly in front of the king.
pub fn king_shield_pawns(board: &Board, team: PieceTeam) -> Score {
    let (king_row, king_col) = match board.find_king(team) {
        Some(square) => square,
        None => return 0.0,
    };
    let front = king_row + team.pawn_row_step();
    let mut count: Score = 0.0;
    for dc in -1..=1i8 {
        if let Some(piece) = board.piece_at(front, king_col + dc) {
            if piece.team == team && piece.class == PieceClass::Pawn {
                count += 1.0;
            }
        }
    }
    count
}
