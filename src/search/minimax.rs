//! Minimax search with alpha-beta pruning.
//!
//! Fixed-depth, no iterative deepening, no transposition table. The
//! search alternates the side to move internally; the `team` argument
//! only fixes whose perspective leaf evaluation is computed from. The
//! personality's move preference orders siblings before recursion, which
//! changes which branches get pruned but never which score the root
//! settles on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::PieceTeam;
use crate::personality::profile::Personality;
use crate::rules::check::is_king_in_check;
use crate::rules::generate::generate_all_valid_moves;
use crate::rules::special::apply_with_auxiliary;
use crate::search::difficulty::MAX_SEARCH_DEPTH;
use crate::search::scoring::{evaluate, Score, MATE_SCORE, MAX_SCORE, MIN_SCORE};

/// Cooperative cancellation flag, polled between sibling-move
/// evaluations. A host running the search off its main thread keeps a
/// clone and flips it to abort; the root then returns the best move
/// scored so far, or None when nothing was scored yet.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

fn cancelled(cancel: Option<&CancelToken>) -> bool {
    cancel.is_some_and(CancelToken::is_cancelled)
}

/// Picks the best move for `team` by searching `depth` plies.
///
/// Returns None when `team` has no legal move (checkmate or stalemate
/// already on the board) or when the search was cancelled before any
/// root move finished scoring. The depth is clamped into
/// `1..=MAX_SEARCH_DEPTH`.
pub fn best_move(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
    depth: usize,
    personality: &Personality,
    cancel: Option<&CancelToken>,
) -> Option<MoveDescription> {
    let depth = depth.clamp(1, MAX_SEARCH_DEPTH);
    let mut moves = generate_all_valid_moves(board, team, rights, last_move);
    if moves.is_empty() {
        return None;
    }
    (personality.move_preference)(&mut moves);

    let mut alpha = MIN_SCORE;
    let mut best: Option<(MoveDescription, Score)> = None;
    for mv in moves {
        if cancelled(cancel) {
            break;
        }
        let next = apply_with_auxiliary(board, &mv, last_move);
        let next_rights = rights.updated_for(mv.piece, mv.from_row, mv.from_col);
        let score = recurse_ab(
            &next,
            team.opponent(),
            team,
            &next_rights,
            &mv,
            depth - 1,
            alpha,
            MAX_SCORE,
            personality,
            cancel,
        );
        // A score interrupted mid-recursion is partial; drop it.
        if cancelled(cancel) {
            break;
        }
        if best.is_none() || best.is_some_and(|(_, s)| score > s) {
            best = Some((mv, score));
        }
        if score > alpha {
            alpha = score;
        }
    }
    best.map(|(mv, _)| mv)
}

/// One interior node. `to_move` is the side whose moves are expanded;
/// the node maximizes when `to_move` equals the evaluation perspective
/// and minimizes otherwise.
#[allow(clippy::too_many_arguments)]
fn recurse_ab(
    board: &Board,
    to_move: PieceTeam,
    perspective: PieceTeam,
    rights: &CastlingRights,
    last_move: &MoveDescription,
    depth_left: usize,
    mut alpha: Score,
    mut beta: Score,
    personality: &Personality,
    cancel: Option<&CancelToken>,
) -> Score {
    let mut moves = generate_all_valid_moves(board, to_move, rights, Some(last_move));

    if moves.is_empty() {
        if is_king_in_check(board, to_move) {
            // Checkmate against the side to move. Deeper-remaining mates
            // score larger in magnitude so quicker mates win ties.
            let magnitude = MATE_SCORE + depth_left as Score;
            return if to_move == perspective {
                -magnitude
            } else {
                magnitude
            };
        }
        // Stalemate is neutral.
        return 0.0;
    }

    if depth_left == 0 {
        return evaluate(board, perspective, personality);
    }

    (personality.move_preference)(&mut moves);

    let maximizing = to_move == perspective;
    let mut value = if maximizing { MIN_SCORE } else { MAX_SCORE };
    for mv in moves {
        if cancelled(cancel) {
            break;
        }
        let next = apply_with_auxiliary(board, &mv, Some(last_move));
        let next_rights = rights.updated_for(mv.piece, mv.from_row, mv.from_col);
        let child = recurse_ab(
            &next,
            to_move.opponent(),
            perspective,
            &next_rights,
            &mv,
            depth_left - 1,
            alpha,
            beta,
            personality,
            cancel,
        );
        if maximizing {
            if child > value {
                value = child;
            }
            if value > alpha {
                alpha = value;
            }
        } else {
            if child < value {
                value = child;
            }
            if value < beta {
                beta = value;
            }
        }
        if beta <= alpha {
            break;
        }
    }
    value
}
