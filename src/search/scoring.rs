//! Score conventions and static evaluation.
//!
//! Scores are `f32` so personalities can apply fractional weighting and
//! bounded random noise. Positive always favors the perspective team the
//! evaluation was requested for.

use crate::board::board::Board;
use crate::board::piece::PieceTeam;
use crate::personality::profile::Personality;

pub type Score = f32;

/// Sentinel bounds for the alpha-beta window. Large enough to dominate
/// any heuristic total.
pub const MIN_SCORE: Score = -1E9;
pub const MAX_SCORE: Score = 1E9;

/// Sentinel magnitude for a forced mate; mate outcomes must outrank any
/// material or positional swing.
pub const MATE_SCORE: Score = 1E6;

/// Static evaluation of `board` from `team`'s perspective.
///
/// Sums material value plus positional bonus over every occupied square,
/// adding for `team`'s pieces and subtracting for the opponent's. The
/// positional tables are authored from Light's point of view; the rank
/// index is mirrored for Dark pieces. The raw total is then passed
/// through the personality's evaluation modifier.
pub fn evaluate(board: &Board, team: PieceTeam, personality: &Personality) -> Score {
    let mut total: Score = 0.0;
    for (row, col, piece) in board.occupied_squares() {
        let table = (personality.positional_table)(piece.class);
        let table_row = match piece.team {
            PieceTeam::Light => row,
            PieceTeam::Dark => 7 - row,
        };
        let value = (personality.piece_values)(piece.class)
            + table[table_row as usize][col as usize];
        if piece.team == team {
            total += value;
        } else {
            total -= value;
        }
    }
    (personality.evaluation_modifier)(board, team, total)
}
