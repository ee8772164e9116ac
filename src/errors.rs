//! Errors used throughout the engine.
//!
//! A single crate-wide error enum keeps propagation uniform: position setup,
//! move resolution, and the make/unmake machinery all return `EngineResult`.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A position-description (FEN) string could not be parsed into a valid
    /// board, or described an impossible setup such as a missing king.
    #[error("invalid position description: {0}")]
    InvalidPositionDescription(String),

    /// A textual square coordinate was outside `a1..h8`.
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    /// A requested move did not match any entry in the current legal-move
    /// list, or named an empty/enemy source square.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A move was applied beyond the maximum supported game/search depth.
    /// This is a caller precondition violation, never silently absorbed.
    #[error("undo stack capacity of {capacity} exceeded")]
    UndoStackFull { capacity: usize },
}
