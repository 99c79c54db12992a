//! FEN parsing and generation.
//!
//! Convenience for tests, benches, and the demo binary; the core engine
//! itself exchanges in-memory values only. The en-passant field is
//! translated into the synthetic double-step move that authorizes the
//! capture, since the rules take a last move rather than a target square.

use crate::board::board::Board;
use crate::board::castling::CastlingRights;
use crate::board::chess_move::MoveDescription;
use crate::board::piece::{PieceClass, PieceRecord, PieceTeam};
use crate::errors::ChessErrors;

/// A parsed position: everything the rules need to continue a game.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FenState {
    pub board: Board,
    pub turn: PieceTeam,
    pub rights: CastlingRights,
    /// The double-step pawn move implied by the en-passant field, if any.
    pub last_double_step: Option<MoveDescription>,
}

pub fn parse_fen(fen: &str) -> Result<FenState, ChessErrors> {
    let mut fields = fen.split_ascii_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenForm(fen.to_string()))?;

    let mut board = Board::empty();
    let mut row: i8 = 0;
    let mut col: i8 = 0;
    for token in placement.chars() {
        match token {
            '/' => {
                if col != 8 {
                    return Err(ChessErrors::InvalidFenForm(fen.to_string()));
                }
                row += 1;
                col = 0;
            }
            '1'..='8' => {
                col += (token as u8 - b'0') as i8;
            }
            _ => {
                let piece = PieceRecord::from_fen_char(token)
                    .ok_or(ChessErrors::InvalidFenToken(token))?;
                if !Board::in_bounds(row, col) {
                    return Err(ChessErrors::InvalidFenForm(fen.to_string()));
                }
                board.place(row, col, piece);
                col += 1;
            }
        }
    }
    if row != 7 || col != 8 {
        return Err(ChessErrors::InvalidFenForm(fen.to_string()));
    }

    let turn = match fields.next() {
        Some("w") | None => PieceTeam::Light,
        Some("b") => PieceTeam::Dark,
        Some(other) => {
            return Err(ChessErrors::InvalidFenForm(other.to_string()));
        }
    };

    let mut rights = CastlingRights::none();
    if let Some(castling) = fields.next() {
        for token in castling.chars() {
            match token {
                'K' => rights.light_kingside = true,
                'Q' => rights.light_queenside = true,
                'k' => rights.dark_kingside = true,
                'q' => rights.dark_queenside = true,
                '-' => {}
                _ => return Err(ChessErrors::InvalidFenToken(token)),
            }
        }
    }

    let last_double_step = match fields.next() {
        Some("-") | None => None,
        Some(square) => {
            let (target_row, target_col) = square_from_name(square)?;
            // The pawn that just double-stepped belongs to the side not
            // on move; the target square is the one it skipped over.
            let mover = turn.opponent();
            let step = mover.pawn_row_step();
            let piece = PieceRecord::new(PieceClass::Pawn, mover);
            Some(MoveDescription {
                from_row: target_row - step,
                from_col: target_col,
                to_row: target_row + step,
                to_col: target_col,
                piece,
                captured_piece: None,
            })
        }
    };

    Ok(FenState {
        board,
        turn,
        rights,
        last_double_step,
    })
}

/// Renders a position back out as FEN. Half-move and full-move counters
/// are not tracked by the engine and are emitted as "0 1".
pub fn generate_fen(
    board: &Board,
    turn: PieceTeam,
    rights: &CastlingRights,
    last_double_step: Option<&MoveDescription>,
) -> String {
    let mut placement = String::new();
    for row in 0..8i8 {
        if row > 0 {
            placement.push('/');
        }
        let mut empty_run = 0;
        for col in 0..8i8 {
            match board.piece_at(row, col) {
                Some(piece) => {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    placement.push(piece.fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
    }

    let turn_field = match turn {
        PieceTeam::Light => "w",
        PieceTeam::Dark => "b",
    };

    let mut castling = String::new();
    if rights.light_kingside {
        castling.push('K');
    }
    if rights.light_queenside {
        castling.push('Q');
    }
    if rights.dark_kingside {
        castling.push('k');
    }
    if rights.dark_queenside {
        castling.push('q');
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let en_passant = match last_double_step {
        Some(mv) if mv.is_double_pawn_push() => {
            let skipped_row = (mv.from_row + mv.to_row) / 2;
            square_to_name(skipped_row, mv.to_col)
        }
        _ => "-".to_string(),
    };

    format!("{placement} {turn_field} {castling} {en_passant} 0 1")
}

fn square_from_name(name: &str) -> Result<(i8, i8), ChessErrors> {
    let mut chars = name.chars();
    let file = chars
        .next()
        .ok_or_else(|| ChessErrors::InvalidSquareName(name.to_string()))?;
    let rank = chars
        .next()
        .ok_or_else(|| ChessErrors::InvalidSquareName(name.to_string()))?;
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) || chars.next().is_some() {
        return Err(ChessErrors::InvalidSquareName(name.to_string()));
    }
    let col = (file as u8 - b'a') as i8;
    let row = 8 - (rank as u8 - b'0') as i8;
    Ok((row, col))
}

fn square_to_name(row: i8, col: i8) -> String {
    let file = (b'a' + col as u8) as char;
    let rank = 8 - row;
    format!("{file}{rank}")
}
