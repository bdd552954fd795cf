//! Error types for the engine.

use thiserror::Error;

use super::moves::Move;
use super::position::Position;
use super::symbol::Symbol;

/// Everything that can go wrong while building or playing on a board.
///
/// No operation that returns an error leaves a board partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid move: position {position} is outside a {rows}x{cols} board")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("invalid move: position {position} is not available")]
    Occupied { position: Position },

    #[error("invalid move: path ended at a board with {depth} level(s) left")]
    PathTooShort { depth: usize },

    #[error("invalid move: path has {extra} segment(s) below a cell")]
    PathTooLong { extra: usize },

    #[error("invalid move: cell already holds {symbol}")]
    CellTaken { symbol: Symbol },

    #[error("invalid move: {symbol} cannot be placed")]
    InvalidSymbol { symbol: Symbol },

    #[error("unable to undo move {got}, last played move was {expected}")]
    UndoMismatch { expected: Move, got: Move },

    #[error("unable to undo: no move has been played")]
    NothingToUndo,

    #[error("wrong symbol: expected {expected}, got {got}")]
    WrongSymbol { expected: Symbol, got: Symbol },

    #[error("illegal move {mv}: outside the active region")]
    IllegalMove { mv: Move },

    #[error("game already over")]
    GameOver,

    #[error("no legal move on an undecided board")]
    NoLegalMoves,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::InvalidConfig`].
    pub fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error rejects a move (as opposed to construction or undo).
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::OutOfBounds { .. }
                | Error::Occupied { .. }
                | Error::PathTooShort { .. }
                | Error::PathTooLong { .. }
                | Error::CellTaken { .. }
                | Error::InvalidSymbol { .. }
                | Error::WrongSymbol { .. }
                | Error::IllegalMove { .. }
                | Error::GameOver
        )
    }
}
