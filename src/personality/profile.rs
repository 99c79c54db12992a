//! The personality value type.
//!
//! A personality bundles everything that gives the synthetic opponent its
//! style: material weights, positional tables, an evaluation modifier,
//! a move-ordering preference, and a difficulty multiplier. Personalities
//! are plain `Copy` values built from fn pointers and static tables;
//! callers resolve one once (by name, via `registry::by_name`) and pass
//! it to every evaluation and search call rather than re-resolving any
//! ambient global state.

use crate::board::board::Board;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::{PieceClass, PieceTeam};
use crate::personality::tables::PositionalTable;
use crate::search::scoring::Score;

/// Adjusts the raw material+positional total. May add heuristic bonuses
/// or bounded randomness; must stay within ordinary heuristic magnitudes
/// so mate sentinels keep dominating.
pub type EvaluationModifier = fn(&Board, PieceTeam, Score) -> Score;

/// Reorders a legal move list in place before search explores it. Purely
/// a traversal-order heuristic: it must never add, drop, or alter moves,
/// only permute them, since order affects pruning but never legality.
pub type MovePreference = fn(&mut Vec<MoveDescription>);

#[derive(Copy, Clone)]
pub struct Personality {
    pub name: &'static str,
    pub piece_values: fn(PieceClass) -> Score,
    pub positional_table: fn(PieceClass) -> &'static PositionalTable,
    pub evaluation_modifier: EvaluationModifier,
    pub move_preference: MovePreference,
    /// Scales the difficulty tier's base search depth; the result is
    /// floored at one ply.
    pub difficulty_multiplier: f32,
}

impl std::fmt::Debug for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Personality")
            .field("name", &self.name)
            .field("difficulty_multiplier", &self.difficulty_multiplier)
            .finish()
    }
}
