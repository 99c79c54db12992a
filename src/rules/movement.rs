//! Per-piece move geometry.
//!
//! `is_valid_move` answers whether a move obeys the moving piece's
//! movement and capture rules. The answer is pseudo-legal: it does not
//! consider whether the mover's own king is left in check afterwards;
//! `rules::check::would_be_in_check` is the filter that turns pseudo-legal
//! into legal. All failures are reported as `false` (including
//! out-of-range coordinates), never as errors, so hosts can probe
//! candidate moves freely.

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::{PieceClass, PieceRecord};
use crate::rules::attacks::{is_square_attacked, KNIGHT_OFFSETS};

/// Validates one candidate move against the moving piece's rules.
///
/// `last_move` authorizes en passant: a caller that passes `None` gets no
/// en-passant legality. That is a documented caller responsibility, not a
/// silent default. `rights` gates castling the same way.
pub fn is_valid_move(
    board: &Board,
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> bool {
    if !Board::in_bounds(from_row, from_col) || !Board::in_bounds(to_row, to_col) {
        return false;
    }
    if from_row == to_row && from_col == to_col {
        return false;
    }
    let piece = match board.piece_at(from_row, from_col) {
        Some(piece) => piece,
        None => return false,
    };
    if let Some(target) = board.piece_at(to_row, to_col) {
        if target.team == piece.team {
            return false;
        }
    }

    match piece.class {
        PieceClass::Pawn => is_valid_pawn_move(board, piece, from_row, from_col, to_row, to_col, last_move),
        PieceClass::Knight => is_valid_knight_move(from_row, from_col, to_row, to_col),
        PieceClass::Bishop => {
            is_diagonal(from_row, from_col, to_row, to_col)
                && is_path_clear(board, from_row, from_col, to_row, to_col)
        }
        PieceClass::Rook => {
            is_straight(from_row, from_col, to_row, to_col)
                && is_path_clear(board, from_row, from_col, to_row, to_col)
        }
        PieceClass::Queen => {
            (is_diagonal(from_row, from_col, to_row, to_col)
                || is_straight(from_row, from_col, to_row, to_col))
                && is_path_clear(board, from_row, from_col, to_row, to_col)
        }
        PieceClass::King => {
            is_valid_king_move(board, piece, from_row, from_col, to_row, to_col, rights)
        }
    }
}

/// Walks the straight or diagonal step vector strictly between the two
/// squares and fails on the first occupied one. Endpoints are exclusive.
pub fn is_path_clear(board: &Board, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
    let dr = (to_row - from_row).signum();
    let dc = (to_col - from_col).signum();
    let mut row = from_row + dr;
    let mut col = from_col + dc;
    while (row, col) != (to_row, to_col) {
        if !Board::in_bounds(row, col) {
            return false;
        }
        if board.piece_at(row, col).is_some() {
            return false;
        }
        row += dr;
        col += dc;
    }
    true
}

fn is_diagonal(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
    (to_row - from_row).abs() == (to_col - from_col).abs()
}

fn is_straight(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
    from_row == to_row || from_col == to_col
}

fn is_valid_knight_move(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| (to_row - from_row, to_col - from_col) == (dr, dc))
}

fn is_valid_pawn_move(
    board: &Board,
    piece: PieceRecord,
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
    last_move: Option<&MoveDescription>,
) -> bool {
    let step = piece.team.pawn_row_step();
    let dr = to_row - from_row;
    let dc = to_col - from_col;

    // Forward pushes land on empty squares only.
    if dc == 0 {
        if board.piece_at(to_row, to_col).is_some() {
            return false;
        }
        if dr == step {
            return true;
        }
        return dr == 2 * step
            && from_row == piece.team.pawn_start_row()
            && board.piece_at(from_row + step, from_col).is_none();
    }

    if dc.abs() != 1 || dr != step {
        return false;
    }

    // Ordinary diagonal capture.
    if let Some(target) = board.piece_at(to_row, to_col) {
        return target.team != piece.team;
    }

    // En passant: the opposing pawn double-stepped last ply, landing
    // beside this pawn on the file it now captures across.
    match last_move {
        Some(last) => {
            last.piece.class == PieceClass::Pawn
                && last.piece.team != piece.team
                && last.is_double_pawn_push()
                && last.to_row == from_row
                && last.to_col == to_col
        }
        None => false,
    }
}

fn is_valid_king_move(
    board: &Board,
    piece: PieceRecord,
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
    rights: &CastlingRights,
) -> bool {
    let dr = (to_row - from_row).abs();
    let dc = to_col - from_col;
    if dr <= 1 && dc.abs() <= 1 {
        return true;
    }

    // Castling: two squares along the back rank from the original king
    // square. The king may not castle out of or through an attacked
    // square; landing in check is caught by the check filter at the call
    // site, like any other move.
    if dr != 0 || dc.abs() != 2 {
        return false;
    }
    let row = piece.team.back_row();
    if from_row != row || from_col != 4 {
        return false;
    }
    let kingside = dc == 2;
    let allowed = if kingside {
        rights.kingside(piece.team)
    } else {
        rights.queenside(piece.team)
    };
    if !allowed {
        return false;
    }
    let between: &[i8] = if kingside { &[5, 6] } else { &[1, 2, 3] };
    if between.iter().any(|&c| board.piece_at(row, c).is_some()) {
        return false;
    }
    let passes_through = if kingside { 5 } else { 3 };
    !is_square_attacked(board, row, 4, piece.team)
        && !is_square_attacked(board, row, passes_through, piece.team)
}
