//! Attack detection.
//!
//! `is_square_attacked` re-derives attacks from scratch instead of reusing
//! the move validator: check detection runs inside move validation (for
//! castling and check filtering), so routing it back through
//! `is_valid_move` would recurse. Pawns are handled by their diagonal
//! attack offsets alone (no capture-target requirement), knights by their
//! eight L-offsets, and sliders plus the enemy king by walking the eight
//! rays outward until the first occupied square.

use crate::board::board::Board;
use crate::board::piece::{PieceClass, PieceTeam};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const STRAIGHT_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// True when any piece of `defending_team`'s opponent attacks the square.
pub fn is_square_attacked(board: &Board, row: i8, col: i8, defending_team: PieceTeam) -> bool {
    let attacker = defending_team.opponent();

    // Pawns: an attacking pawn sits one step back along its own advance
    // direction, offset one file either way.
    let pawn_step = attacker.pawn_row_step();
    for dc in [-1i8, 1] {
        if let Some(piece) = board.piece_at(row - pawn_step, col + dc) {
            if piece.team == attacker && piece.class == PieceClass::Pawn {
                return true;
            }
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(piece) = board.piece_at(row + dr, col + dc) {
            if piece.team == attacker && piece.class == PieceClass::Knight {
                return true;
            }
        }
    }

    if ray_attack(board, row, col, attacker, &DIAGONAL_RAYS, PieceClass::Bishop) {
        return true;
    }
    if ray_attack(board, row, col, attacker, &STRAIGHT_RAYS, PieceClass::Rook) {
        return true;
    }

    false
}

/// Walks each ray outward; the first occupied square settles the ray. A
/// queen or the matching slider attacks from any distance, the enemy king
/// only from distance one.
fn ray_attack(
    board: &Board,
    row: i8,
    col: i8,
    attacker: PieceTeam,
    rays: &[(i8, i8); 4],
    slider: PieceClass,
) -> bool {
    for &(dr, dc) in rays {
        for step in 1..8i8 {
            let r = row + dr * step;
            let c = col + dc * step;
            if !Board::in_bounds(r, c) {
                break;
            }
            if let Some(piece) = board.piece_at(r, c) {
                if piece.team == attacker {
                    if piece.class == slider || piece.class == PieceClass::Queen {
                        return true;
                    }
                    if piece.class == PieceClass::King && step == 1 {
                        return true;
                    }
                }
                break;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceRecord;

    fn lone(class: PieceClass, team: PieceTeam, row: i8, col: i8) -> Board {
        let mut board = Board::empty();
        board.place(row, col, PieceRecord::new(class, team));
        board
    }

    #[test]
    fn pawn_attacks_its_diagonals_only() {
        let board = lone(PieceClass::Pawn, PieceTeam::Light, 4, 4);
        // Light pawns advance toward row 0, attacking (3, 3) and (3, 5).
        assert!(is_square_attacked(&board, 3, 3, PieceTeam::Dark));
        assert!(is_square_attacked(&board, 3, 5, PieceTeam::Dark));
        assert!(!is_square_attacked(&board, 3, 4, PieceTeam::Dark));
        assert!(!is_square_attacked(&board, 5, 3, PieceTeam::Dark));
    }

    #[test]
    fn knight_attacks_all_eight_offsets() {
        let board = lone(PieceClass::Knight, PieceTeam::Dark, 4, 4);
        for (dr, dc) in KNIGHT_OFFSETS {
            assert!(is_square_attacked(&board, 4 + dr, 4 + dc, PieceTeam::Light));
        }
        assert!(!is_square_attacked(&board, 4, 5, PieceTeam::Light));
    }

    #[test]
    fn slider_attack_stops_at_first_occupied_square() {
        let mut board = lone(PieceClass::Rook, PieceTeam::Dark, 4, 0);
        assert!(is_square_attacked(&board, 4, 7, PieceTeam::Light));
        // A blocker on the ray shadows everything behind it.
        board.place(4, 3, PieceRecord::new(PieceClass::Pawn, PieceTeam::Light));
        assert!(!is_square_attacked(&board, 4, 7, PieceTeam::Light));
        assert!(is_square_attacked(&board, 4, 3, PieceTeam::Light));
    }

    #[test]
    fn queen_attacks_both_ray_families() {
        let board = lone(PieceClass::Queen, PieceTeam::Light, 4, 4);
        assert!(is_square_attacked(&board, 0, 4, PieceTeam::Dark));
        assert!(is_square_attacked(&board, 1, 1, PieceTeam::Dark));
        assert!(!is_square_attacked(&board, 2, 3, PieceTeam::Dark));
    }

    #[test]
    fn king_attacks_adjacent_squares_only() {
        let board = lone(PieceClass::King, PieceTeam::Dark, 4, 4);
        assert!(is_square_attacked(&board, 3, 3, PieceTeam::Light));
        assert!(is_square_attacked(&board, 5, 4, PieceTeam::Light));
        assert!(!is_square_attacked(&board, 2, 4, PieceTeam::Light));
    }
}
