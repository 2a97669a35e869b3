//! Error types for engine operations.

use crate::error::{ErrorSeverity, GameError};
use crate::geometry::LayoutError;
use crate::state::{Position, StateError};

use super::Outcome;

/// Reasons a block attempt is rejected. A rejection never mutates the engine.
///
/// Variants are listed in the order the preconditions are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockError {
    #[error("game is already over ({outcome})")]
    GameAlreadyOver { outcome: Outcome },

    #[error("cell {position} is out of bounds (board size: {size})")]
    OutOfBounds { position: Position, size: u32 },

    #[error("cell {position} is already blocked")]
    CellOccupied { position: Position },

    #[error("cell {position} is occupied by the cat")]
    CellIsToken { position: Position },
}

impl GameError for BlockError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Another free cell is still a legal move this turn
            BlockError::CellOccupied { .. } | BlockError::CellIsToken { .. } => {
                ErrorSeverity::Recoverable
            }
            BlockError::GameAlreadyOver { .. } | BlockError::OutOfBounds { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BlockError::GameAlreadyOver { .. } => "BLOCK_GAME_ALREADY_OVER",
            BlockError::OutOfBounds { .. } => "BLOCK_OUT_OF_BOUNDS",
            BlockError::CellOccupied { .. } => "BLOCK_CELL_OCCUPIED",
            BlockError::CellIsToken { .. } => "BLOCK_CELL_IS_TOKEN",
        }
    }
}

/// Errors surfaced while constructing an engine from a configuration or a
/// hand-built board.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SetupError::Layout(err) => err.severity(),
            SetupError::State(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SetupError::Layout(err) => err.error_code(),
            SetupError::State(err) => err.error_code(),
        }
    }
}
