//! The fixed personality registry.
//!
//! Six named profiles differing in piece weighting, evaluation modifier,
//! move-ordering preference, and difficulty multiplier. `by_name` never
//! fails: an unknown name falls back to "standard" so an AI move request
//! is always resolvable.

use rand::seq::SliceRandom;
use rand::RngExt;

use crate::board::board::Board;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::{PieceClass, PieceTeam};
use crate::personality::heuristics::{
    center_occupation, is_attacked_by_opponent, is_protected_by_own_side, king_shield_pawns,
    CENTER_SQUARES,
};
use crate::personality::profile::Personality;
use crate::personality::tables::{
    PositionalTable, BISHOP_TABLE, FLAT_TABLE, KING_TABLE, KNIGHT_TABLE, PAWN_TABLE, QUEEN_TABLE,
    ROOK_TABLE,
};
use crate::search::scoring::Score;

/// Resolves a profile by name, case-insensitively. Unknown names fall
/// back to the standard profile.
pub fn by_name(name: &str) -> Personality {
    match name.to_ascii_lowercase().as_str() {
        "aggressive" => aggressive(),
        "defensive" => defensive(),
        "positional" => positional(),
        "creative" => creative(),
        "beginner" => beginner(),
        _ => standard(),
    }
}

pub const PERSONALITY_NAMES: [&str; 6] = [
    "standard",
    "aggressive",
    "defensive",
    "positional",
    "creative",
    "beginner",
];

pub fn standard() -> Personality {
    Personality {
        name: "standard",
        piece_values: standard_values,
        positional_table: standard_tables,
        evaluation_modifier: identity_modifier,
        move_preference: keep_order,
        difficulty_multiplier: 1.0,
    }
}

/// Overvalues attacking chances: bonus for every enemy piece currently
/// under attack, and captures are searched first.
pub fn aggressive() -> Personality {
    Personality {
        name: "aggressive",
        piece_values: aggressive_values,
        positional_table: standard_tables,
        evaluation_modifier: aggressive_modifier,
        move_preference: captures_first,
        difficulty_multiplier: 1.0,
    }
}

/// Rewards keeping pieces defended and the king sheltered; quiet moves
/// are searched before captures.
pub fn defensive() -> Personality {
    Personality {
        name: "defensive",
        piece_values: defensive_values,
        positional_table: standard_tables,
        evaluation_modifier: defensive_modifier,
        move_preference: quiet_first,
        difficulty_multiplier: 1.0,
    }
}

/// Leans on the square tables and center control, and searches a little
/// deeper than its tier.
pub fn positional() -> Personality {
    Personality {
        name: "positional",
        piece_values: standard_values,
        positional_table: standard_tables,
        evaluation_modifier: positional_modifier,
        move_preference: center_ward_first,
        difficulty_multiplier: 1.25,
    }
}

/// Injects bounded noise into evaluation and explores moves in a random
/// order. Explicitly non-deterministic.
pub fn creative() -> Personality {
    Personality {
        name: "creative",
        piece_values: standard_values,
        positional_table: standard_tables,
        evaluation_modifier: creative_modifier,
        move_preference: shuffle,
        difficulty_multiplier: 1.0,
    }
}

/// Material-only weighting, heavy evaluation noise, shallow search.
/// Explicitly non-deterministic.
pub fn beginner() -> Personality {
    Personality {
        name: "beginner",
        piece_values: beginner_values,
        positional_table: flat_tables,
        evaluation_modifier: beginner_modifier,
        move_preference: shuffle,
        difficulty_multiplier: 0.5,
    }
}

fn standard_values(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 100.0,
        PieceClass::Knight => 320.0,
        PieceClass::Bishop => 330.0,
        PieceClass::Rook => 500.0,
        PieceClass::Queen => 900.0,
        PieceClass::King => 5000.0,
    }
}

fn aggressive_values(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 90.0,
        PieceClass::Knight => 340.0,
        PieceClass::Bishop => 340.0,
        PieceClass::Rook => 520.0,
        PieceClass::Queen => 1000.0,
        PieceClass::King => 5000.0,
    }
}

fn defensive_values(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 120.0,
        PieceClass::Knight => 310.0,
        PieceClass::Bishop => 320.0,
        PieceClass::Rook => 500.0,
        PieceClass::Queen => 880.0,
        PieceClass::King => 5000.0,
    }
}

fn beginner_values(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 100.0,
        PieceClass::Knight => 300.0,
        PieceClass::Bishop => 300.0,
        PieceClass::Rook => 500.0,
        PieceClass::Queen => 900.0,
        PieceClass::King => 5000.0,
    }
}

fn standard_tables(class: PieceClass) -> &'static PositionalTable {
    match class {
        PieceClass::Pawn => &PAWN_TABLE,
        PieceClass::Knight => &KNIGHT_TABLE,
        PieceClass::Bishop => &BISHOP_TABLE,
        PieceClass::Rook => &ROOK_TABLE,
        PieceClass::Queen => &QUEEN_TABLE,
        PieceClass::King => &KING_TABLE,
    }
}

fn flat_tables(_class: PieceClass) -> &'static PositionalTable {
    &FLAT_TABLE
}

fn identity_modifier(_board: &Board, _team: PieceTeam, base: Score) -> Score {
    base
}

fn aggressive_modifier(board: &Board, team: PieceTeam, base: Score) -> Score {
    let enemy = team.opponent();
    let mut bonus: Score = 0.0;
    for (row, col, piece) in board.occupied_squares() {
        if piece.team == enemy
            && piece.class != PieceClass::King
            && is_attacked_by_opponent(board, row, col, enemy)
        {
            bonus += 0.15 * standard_values(piece.class);
        }
    }
    base + bonus
}

fn defensive_modifier(board: &Board, team: PieceTeam, base: Score) -> Score {
    let mut bonus: Score = 0.0;
    for (row, col, piece) in board.occupied_squares() {
        if piece.team == team
            && piece.class != PieceClass::King
            && is_protected_by_own_side(board, row, col, team)
        {
            bonus += 0.1 * standard_values(piece.class);
        }
    }
    base + bonus + 12.0 * king_shield_pawns(board, team)
}

fn positional_modifier(board: &Board, team: PieceTeam, base: Score) -> Score {
    base + 8.0 * (center_occupation(board, team) - center_occupation(board, team.opponent()))
}

fn creative_modifier(_board: &Board, _team: PieceTeam, base: Score) -> Score {
    base + rand::rng().random_range(-30.0..30.0)
}

fn beginner_modifier(_board: &Board, _team: PieceTeam, base: Score) -> Score {
    base + rand::rng().random_range(-120.0..120.0)
}

fn keep_order(_moves: &mut Vec<MoveDescription>) {}

fn captures_first(moves: &mut Vec<MoveDescription>) {
    moves.sort_by_key(|mv| !mv.is_capture());
}

fn quiet_first(moves: &mut Vec<MoveDescription>) {
    moves.sort_by_key(|mv| mv.is_capture());
}

fn center_ward_first(moves: &mut Vec<MoveDescription>) {
    moves.sort_by_key(|mv| {
        CENTER_SQUARES
            .iter()
            .map(|&(row, col)| (mv.to_row - row).abs() + (mv.to_col - col).abs())
            .min()
            .unwrap_or(0)
    });
}

fn shuffle(moves: &mut Vec<MoveDescription>) {
    moves.shuffle(&mut rand::rng());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::castling::CastlingRights;
    use crate::board::piece::PieceRecord;
    use crate::rules::generate::generate_all_valid_moves;
    use crate::search::scoring::evaluate;

    #[test]
    fn unknown_name_falls_back_to_standard() {
        assert_eq!(by_name("grandmaster").name, "standard");
        assert_eq!(by_name("").name, "standard");
    }

    #[test]
    fn every_registered_name_resolves_to_itself() {
        for name in PERSONALITY_NAMES {
            assert_eq!(by_name(name).name, name);
        }
        assert_eq!(by_name("AGGRESSIVE").name, "aggressive");
    }

    #[test]
    fn move_preferences_permute_without_changing_the_set() {
        let board = Board::standard_start();
        let rights = CastlingRights::all();
        let reference = generate_all_valid_moves(&board, PieceTeam::Light, &rights, None);
        for name in PERSONALITY_NAMES {
            let personality = by_name(name);
            let mut reordered = reference.clone();
            (personality.move_preference)(&mut reordered);
            assert_eq!(reordered.len(), reference.len(), "{name}");
            for mv in &reference {
                assert!(reordered.contains(mv), "{name} dropped {mv}");
            }
        }
    }

    #[test]
    fn captures_first_puts_captures_ahead_of_quiet_moves() {
        let mut board = Board::empty();
        board.place(4, 4, PieceRecord::new(PieceClass::Rook, PieceTeam::Light));
        board.place(4, 7, PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark));
        board.place(7, 0, PieceRecord::new(PieceClass::King, PieceTeam::Light));
        board.place(0, 7, PieceRecord::new(PieceClass::King, PieceTeam::Dark));
        let mut moves =
            generate_all_valid_moves(&board, PieceTeam::Light, &CastlingRights::none(), None);
        captures_first(&mut moves);
        assert!(moves[0].is_capture());
        let first_quiet = moves.iter().position(|mv| !mv.is_capture()).unwrap();
        assert!(moves[first_quiet..].iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn deterministic_modifiers_are_stable_across_calls() {
        let board = Board::standard_start();
        for name in ["standard", "aggressive", "defensive", "positional"] {
            let personality = by_name(name);
            let first = evaluate(&board, PieceTeam::Light, &personality);
            let second = evaluate(&board, PieceTeam::Light, &personality);
            assert_eq!(first, second, "{name}");
        }
    }
}
