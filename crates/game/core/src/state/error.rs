//! State management errors.
//!
//! Errors raised while building a board or placing the cat on one.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors that occur while assembling a board state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Board has fewer rows than the layout supports.
    #[error("Board size {size} is too small (min: {min})")]
    BoardTooSmall {
        /// Requested size.
        size: u32,
        /// Minimum supported size.
        min: u32,
    },

    /// A hand-drawn row does not have one cell per row of the board.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat occupancy does not hold exactly `size * size` cells.
    #[error("Board of size {size} needs {expected} cells, got {found}")]
    CellCountMismatch {
        size: u32,
        expected: usize,
        found: usize,
    },

    /// A hand-drawn row contains something other than `#` or `.`.
    #[error("Unknown cell glyph {glyph:?} in row {row}")]
    InvalidGlyph { glyph: char, row: usize },

    /// The cat was placed outside the board.
    #[error("Cat position {position} is out of bounds (board size: {size})")]
    TokenOutOfBounds {
        /// The invalid position.
        position: Position,
        /// Board size.
        size: u32,
    },

    /// The cat was placed on a blocked cell.
    #[error("Cat position {position} is blocked")]
    TokenOnBlockedCell { position: Position },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            BoardTooSmall { .. } => "STATE_BOARD_TOO_SMALL",
            RaggedRow { .. } => "STATE_RAGGED_ROW",
            CellCountMismatch { .. } => "STATE_CELL_COUNT_MISMATCH",
            InvalidGlyph { .. } => "STATE_INVALID_GLYPH",
            TokenOutOfBounds { .. } => "STATE_TOKEN_OUT_OF_BOUNDS",
            TokenOnBlockedCell { .. } => "STATE_TOKEN_ON_BLOCKED_CELL",
        }
    }
}
