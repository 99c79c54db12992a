//! The host-facing boundary.
//!
//! A presentation layer (board rendering, input capture, timers,
//! settings) drives the engine exclusively through these three
//! request/response calls. The core emits no events and holds no
//! process-wide state; game history and UI concerns live entirely with
//! the host.

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::PieceTeam;
use crate::classify::status::{classify, GameStatus};
use crate::personality::registry::by_name;
use crate::rules::check::would_be_in_check;
use crate::rules::movement::is_valid_move;
use crate::rules::special::{auxiliary_edit, is_promotion_move, AuxiliaryEdit};
use crate::search::difficulty::{search_depth, Difficulty};
use crate::search::minimax::{best_move, CancelToken};

/// Answer to a move request: whether it is legal, the auxiliary edit it
/// implies (castling rook hop or en-passant pawn removal), and whether
/// the moving pawn must promote. The host applies the primary move and
/// the auxiliary edit atomically, then overwrites the destination piece
/// for promotion.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveAssessment {
    pub legal: bool,
    pub auxiliary: Option<AuxiliaryEdit>,
    pub promotion_eligible: bool,
}

impl MoveAssessment {
    fn illegal() -> Self {
        MoveAssessment {
            legal: false,
            auxiliary: None,
            promotion_eligible: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PositionReport {
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

/// Validates a requested move and describes what applying it entails.
/// Illegal requests (including out-of-range coordinates) come back as
/// `legal: false`, never as an error.
pub fn validate_and_describe_move(
    board: &Board,
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> MoveAssessment {
    let mover = match board.piece_at(from_row, from_col) {
        Some(piece) => piece.team,
        None => return MoveAssessment::illegal(),
    };
    if !is_valid_move(board, from_row, from_col, to_row, to_col, rights, last_move) {
        return MoveAssessment::illegal();
    }
    if would_be_in_check(board, from_row, from_col, to_row, to_col, mover, last_move) {
        return MoveAssessment::illegal();
    }
    // Legal; describe() cannot fail past the checks above.
    match MoveDescription::describe(board, from_row, from_col, to_row, to_col) {
        Some(mv) => MoveAssessment {
            legal: true,
            auxiliary: auxiliary_edit(board, &mv, last_move),
            promotion_eligible: is_promotion_move(&mv),
        },
        None => MoveAssessment::illegal(),
    }
}

/// Labels the position for `team`: in check, checkmated, or stalemated.
pub fn classify_position(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
) -> PositionReport {
    let status = classify(board, team, rights, last_move);
    PositionReport {
        in_check: matches!(status, GameStatus::Check | GameStatus::Checkmate),
        checkmate: status == GameStatus::Checkmate,
        stalemate: status == GameStatus::Stalemate,
    }
}

/// Picks a move for the computer-controlled side. The personality is
/// resolved by name (unknown names fall back to "standard") and its
/// multiplier scales the difficulty tier's depth. `None` means the game
/// is already over for `team`; the host must treat it as end-of-game,
/// not retry.
pub fn request_ai_move(
    board: &Board,
    team: PieceTeam,
    rights: &CastlingRights,
    last_move: Option<&MoveDescription>,
    difficulty: Difficulty,
    personality_name: &str,
    cancel: Option<&CancelToken>,
) -> Option<MoveDescription> {
    let personality = by_name(personality_name);
    let depth = search_depth(difficulty, &personality);
    best_move(board, team, rights, last_move, depth, &personality, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{PieceClass, PieceRecord};
    use crate::utils::fen::parse_fen;

    #[test]
    fn legal_castling_reports_the_rook_companion_move() {
        let state = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let assessment =
            validate_and_describe_move(&state.board, 7, 4, 7, 6, &state.rights, None);
        assert!(assessment.legal);
        assert_eq!(
            assessment.auxiliary,
            Some(AuxiliaryEdit::CastleRook {
                from_row: 7,
                from_col: 7,
                to_row: 7,
                to_col: 5,
            })
        );
        assert!(!assessment.promotion_eligible);
    }

    #[test]
    fn en_passant_reports_the_captured_pawn_square() {
        let state =
            parse_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2").unwrap();
        let last = state.last_double_step.unwrap();
        // Dark pawn on d4 takes the e-pawn in passing.
        let assessment =
            validate_and_describe_move(&state.board, 4, 3, 5, 4, &state.rights, Some(&last));
        assert!(assessment.legal);
        assert_eq!(
            assessment.auxiliary,
            Some(AuxiliaryEdit::EnPassantCapture { row: 4, col: 4 })
        );
    }

    #[test]
    fn promotion_push_is_flagged() {
        let mut board = Board::empty();
        board.place(1, 0, PieceRecord::new(PieceClass::Pawn, PieceTeam::Light));
        board.place(7, 4, PieceRecord::new(PieceClass::King, PieceTeam::Light));
        board.place(0, 7, PieceRecord::new(PieceClass::King, PieceTeam::Dark));
        let assessment =
            validate_and_describe_move(&board, 1, 0, 0, 0, &CastlingRights::none(), None);
        assert!(assessment.legal);
        assert!(assessment.promotion_eligible);
        assert_eq!(assessment.auxiliary, None);
    }

    #[test]
    fn illegal_and_out_of_range_requests_report_not_legal() {
        let board = Board::standard_start();
        let rights = CastlingRights::all();
        assert!(!validate_and_describe_move(&board, 6, 4, 3, 4, &rights, None).legal);
        assert!(!validate_and_describe_move(&board, 4, 4, 5, 5, &rights, None).legal);
        assert!(!validate_and_describe_move(&board, 6, 4, 8, 4, &rights, None).legal);
    }

    #[test]
    fn move_exposing_own_king_is_rejected() {
        // The dark rook on e7 is pinned against its king by the rook on e2.
        let pinned = parse_fen("4k3/4r3/8/8/8/8/4R3/4K3 b - - 0 1").unwrap();
        let assessment =
            validate_and_describe_move(&pinned.board, 1, 4, 1, 0, &pinned.rights, None);
        assert!(!assessment.legal);
    }

    #[test]
    fn classify_position_mirrors_the_status_enum() {
        let mate =
            parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        let report = classify_position(&mate.board, PieceTeam::Light, &mate.rights, None);
        assert!(report.in_check);
        assert!(report.checkmate);
        assert!(!report.stalemate);
    }

    #[test]
    fn ai_move_request_with_unknown_personality_still_resolves() {
        let board = Board::standard_start();
        let rights = CastlingRights::all();
        let mv = request_ai_move(
            &board,
            PieceTeam::Light,
            &rights,
            None,
            Difficulty::Easy,
            "no-such-profile",
            None,
        );
        assert!(mv.is_some());
    }

    #[test]
    fn finished_game_yields_no_ai_move() {
        let mate =
            parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        let mv = request_ai_move(
            &mate.board,
            PieceTeam::Light,
            &mate.rights,
            None,
            Difficulty::Medium,
            "standard",
            None,
        );
        assert_eq!(mv, None);
    }
}
