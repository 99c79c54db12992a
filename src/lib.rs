//! Crate root module declarations for the Quince Chess engine.
//!
//! This file exposes all top-level subsystems (board model, rule legality,
//! game-state classification, evaluation personalities, search, and the
//! host-facing API) so binaries, tests, and external tooling can import
//! stable module paths.

pub mod errors;

pub mod board {
    pub mod board;
    pub mod castling;
    pub mod chess_move;
    pub mod piece;
}

pub mod rules {
    pub mod attacks;
    pub mod check;
    pub mod generate;
    pub mod movement;
    pub mod special;
}

pub mod classify {
    pub mod status;
}

pub mod personality {
    pub mod heuristics;
    pub mod profile;
    pub mod registry;
    pub mod tables;
}

pub mod search {
    pub mod difficulty;
    pub mod minimax;
    pub mod scoring;
}

pub mod api;

pub mod utils {
    pub mod fen;
    pub mod render;
}
