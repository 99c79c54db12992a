//! Self-play demo: two personalities square off from the starting
//! position, with a timestamped move log. Everything game-shaped here
//! (history, turn alternation, termination) is host-side plumbing; move
//! selection goes through the api, classification through the library.

use quince_chess::api::request_ai_move;
use quince_chess::classify::status::{classify, GameStatus};
use quince_chess::board::board::Board;
use quince_chess::board::castling::CastlingRights;
use quince_chess::board::chess_move::MoveDescription;
use quince_chess::board::piece::PieceTeam;
use quince_chess::rules::special::apply_with_auxiliary;
use quince_chess::search::difficulty::Difficulty;
use quince_chess::utils::fen::generate_fen;
use quince_chess::utils::render::render_board;

const MAX_PLIES: usize = 120;

fn main() {
    let light_profile = "aggressive";
    let dark_profile = "defensive";
    println!("self-play: {light_profile} (light) vs {dark_profile} (dark)");

    let mut board = Board::standard_start();
    let mut rights = CastlingRights::all();
    let mut last_move: Option<MoveDescription> = None;
    let mut turn = PieceTeam::Light;

    for ply in 1..=MAX_PLIES {
        let profile = match turn {
            PieceTeam::Light => light_profile,
            PieceTeam::Dark => dark_profile,
        };
        let mv = match request_ai_move(
            &board,
            turn,
            &rights,
            last_move.as_ref(),
            Difficulty::Medium,
            profile,
            None,
        ) {
            Some(mv) => mv,
            None => break,
        };

        board = apply_with_auxiliary(&board, &mv, last_move.as_ref());
        rights = rights.updated_for(mv.piece, mv.from_row, mv.from_col);
        let status = classify(&board, turn.opponent(), &rights, Some(&mv));

        let flag = match status {
            GameStatus::Checkmate => " checkmate",
            GameStatus::Stalemate => " stalemate",
            GameStatus::Check => " check",
            GameStatus::Active => "",
        };
        println!(
            "[{}] ply {:>3} {:<10} {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            ply,
            profile,
            mv,
            flag
        );

        last_move = Some(mv);
        turn = turn.opponent();
        if status.is_terminal() {
            break;
        }
    }

    println!("{}", render_board(&board));
    println!(
        "final: {}",
        generate_fen(&board, turn, &rights, last_move.as_ref())
    );
}
