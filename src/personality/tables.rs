//! Positional bonus tables.
//!
//! Authored from Light's perspective: row 0 is the far side of the board
//! (Dark's back rank) and row 7 is Light's own back rank, matching the
//! board's row convention. Evaluation mirrors the row index for Dark
//! pieces so one set of tables serves both teams. Values are in
//! centipawns.

use crate::search::scoring::Score;

pub type PositionalTable = [[Score; 8]; 8];

pub const PAWN_TABLE: PositionalTable = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0],
    [10.0, 10.0, 20.0, 30.0, 30.0, 20.0, 10.0, 10.0],
    [5.0, 5.0, 10.0, 25.0, 25.0, 10.0, 5.0, 5.0],
    [0.0, 0.0, 0.0, 20.0, 20.0, 0.0, 0.0, 0.0],
    [5.0, -5.0, -10.0, 0.0, 0.0, -10.0, -5.0, 5.0],
    [5.0, 10.0, 10.0, -20.0, -20.0, 10.0, 10.0, 5.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

pub const KNIGHT_TABLE: PositionalTable = [
    [-50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0],
    [-40.0, -20.0, 0.0, 0.0, 0.0, 0.0, -20.0, -40.0],
    [-30.0, 0.0, 10.0, 15.0, 15.0, 10.0, 0.0, -30.0],
    [-30.0, 5.0, 15.0, 20.0, 20.0, 15.0, 5.0, -30.0],
    [-30.0, 0.0, 15.0, 20.0, 20.0, 15.0, 0.0, -30.0],
    [-30.0, 5.0, 10.0, 15.0, 15.0, 10.0, 5.0, -30.0],
    [-40.0, -20.0, 0.0, 5.0, 5.0, 0.0, -20.0, -40.0],
    [-50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0],
];

pub const BISHOP_TABLE: PositionalTable = [
    [-20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0],
    [-10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0],
    [-10.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, -10.0],
    [-10.0, 5.0, 5.0, 10.0, 10.0, 5.0, 5.0, -10.0],
    [-10.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, -10.0],
    [-10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, -10.0],
    [-10.0, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, -10.0],
    [-20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0],
];

pub const ROOK_TABLE: PositionalTable = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [5.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 5.0],
    [-5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0],
    [-5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0],
    [-5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0],
    [-5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0],
    [-5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0],
    [0.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 0.0],
];

pub const QUEEN_TABLE: PositionalTable = [
    [-20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0],
    [-10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0],
    [-10.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0],
    [-5.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0],
    [0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0],
    [-10.0, 5.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0],
    [-10.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, -10.0],
    [-20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0],
];

pub const KING_TABLE: PositionalTable = [
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-20.0, -30.0, -30.0, -40.0, -40.0, -30.0, -30.0, -20.0],
    [-10.0, -20.0, -20.0, -20.0, -20.0, -20.0, -20.0, -10.0],
    [20.0, 20.0, 0.0, 0.0, 0.0, 0.0, 20.0, 20.0],
    [20.0, 30.0, 10.0, 0.0, 0.0, 10.0, 30.0, 20.0],
];

/// A table of zeros, used by profiles that weigh material only.
pub const FLAT_TABLE: PositionalTable = [[0.0; 8]; 8];
