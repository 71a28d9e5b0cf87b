//! Error types surfaced by the game engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{BoardError, SaveError};

/// Errors surfaced while driving the puzzle through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("board operation failed: {0}")]
    Board(#[from] BoardError),

    #[error("saved game rejected: {0}")]
    Save(#[from] SaveError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Board(error) => error.severity(),
            Self::Save(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Board(error) => error.error_code(),
            Self::Save(error) => error.error_code(),
        }
    }
}
