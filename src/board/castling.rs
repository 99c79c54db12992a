//! Castling rights tracking.
//!
//! Rights are monotonic: a side can only lose the ability to castle,
//! never regain it. The update rule is a pure function of the old rights
//! plus the moved piece and its origin square, so callers thread a fresh
//! value through each applied move.

use crate::board::piece::{PieceClass, PieceRecord, PieceTeam};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights {
            light_kingside: true,
            light_queenside: true,
            dark_kingside: true,
            dark_queenside: true,
        }
    }

    pub fn none() -> Self {
        CastlingRights {
            light_kingside: false,
            light_queenside: false,
            dark_kingside: false,
            dark_queenside: false,
        }
    }

    pub fn kingside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.light_kingside,
            PieceTeam::Dark => self.dark_kingside,
        }
    }

    pub fn queenside(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.light_queenside,
            PieceTeam::Dark => self.dark_queenside,
        }
    }

    /// Rights after the given piece moves away from (from_row, from_col).
    /// A king move strips both of its side's flags; a rook leaving its
    /// original corner strips the matching flag. Flags are never restored.
    pub fn updated_for(self, piece: PieceRecord, from_row: i8, from_col: i8) -> Self {
        let mut next = self;
        match piece.class {
            PieceClass::King => match piece.team {
                PieceTeam::Light => {
                    next.light_kingside = false;
                    next.light_queenside = false;
                }
                PieceTeam::Dark => {
                    next.dark_kingside = false;
                    next.dark_queenside = false;
                }
            },
            PieceClass::Rook => {
                if from_row == piece.team.back_row() {
                    match (piece.team, from_col) {
                        (PieceTeam::Light, 0) => next.light_queenside = false,
                        (PieceTeam::Light, 7) => next.light_kingside = false,
                        (PieceTeam::Dark, 0) => next.dark_queenside = false,
                        (PieceTeam::Dark, 7) => next.dark_kingside = false,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        next
    }
}
