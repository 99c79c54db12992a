//! Errors used throughout the engine.
//!
//! The taxonomy is deliberately small: rule legality is reported through
//! boolean results (callers poll before committing state), so errors only
//! arise from parsing and malformed input. `ChessErrors` is the single
//! error type across the crate to simplify propagation and matching.

#[derive(Debug, PartialEq, Eq)]
pub enum ChessErrors {
    /// A character in a FEN placement or castling field was not
    /// recognized.
    InvalidFenToken(char),

    /// A FEN string had malformed structure (missing fields, bad rank
    /// lengths). Payload is the offending string for diagnostics.
    InvalidFenForm(String),

    /// A square name failed to parse (file outside 'a'..'h' or rank
    /// outside '1'..'8').
    InvalidSquareName(String),
}
