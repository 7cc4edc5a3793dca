//! Error types for the tictactoe crate

use thiserror::Error;

use crate::board::Player;

/// Main error type for the tictactoe crate.
///
/// Variants fall into two categories that callers may want to tell apart:
/// construction/validation failures (malformed input) and logical
/// precondition failures (well-formed but illegal actions). Use
/// [`Error::is_validation`] to distinguish them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has wrong length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid symbol '{symbol}' at position {position} (expected 'X', 'O', '_' or ' ')")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("coordinate ({row}, {col}) is out of bounds for the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("it is not {player}'s turn to move")]
    OutOfTurn { player: Player },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for malformed-input failures, false for illegal-action failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidBoardLength { .. }
                | Error::InvalidSymbol { .. }
                | Error::InvalidPieceCounts { .. }
                | Error::OutOfBounds { .. }
        )
    }
}
