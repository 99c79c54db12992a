//! Game-state classification.
//!
//! Derives check / checkmate / stalemate from the legality engine. The
//! host calls this after each accepted move, from the perspective of the
//! side about to move (the mover's opponent).

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::PieceTeam;
use crate::rules::check::is_king_in_check;
use crate::rules::generate::has_any_valid_move;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    Active,
    /// The side to move is in check but can escape.
    Check,
    /// Terminal: in check with no legal escape.
    Checkmate,
    /// Terminal: not in check but no legal move exists.
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Labels the position from `team`'s point of view. Pure: calling it
/// twice on the same inputs yields the same answer.
pub fn classify(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> GameStatus {
    let in_check = is_king_in_check(board, team);
    let can_move = has_any_valid_move(board, team, rights, last_move);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Active,
    }
}

pub fn is_checkmate(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> bool {
    classify(board, team, rights, last_move) == GameStatus::Checkmate
}

pub fn is_stalemate(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> bool {
    classify(board, team, rights, last_move) == GameStatus::Stalemate
}
