use crate::error::{ErrorSeverity, GameError};
use crate::state::{AtomHandle, Position};

/// Errors raised by board operations.
///
/// Blocked slides and input during a running move are deliberately not
/// represented here; the engine filters them out before touching the board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    #[error("atom {atom} does not exist (board holds {atom_count} atoms)")]
    InvalidIndex { atom: AtomHandle, atom_count: usize },

    #[error("atom {atom} must be selected before it can move")]
    NotSelected { atom: AtomHandle },

    #[error("another move is still in progress")]
    MoveInProgress,

    #[error("a move must cover at least one cell")]
    ZeroDistance,

    #[error("atom {atom} left the field at {position}")]
    AtomOutOfBounds { atom: AtomHandle, position: Position },

    #[error("atom {atom} entered wall cell {position}")]
    AtomOnWall { atom: AtomHandle, position: Position },

    #[error("atoms {first} and {second} both occupy {position}")]
    AtomsOverlap {
        first: AtomHandle,
        second: AtomHandle,
        position: Position,
    },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidIndex { .. } => ErrorSeverity::Recoverable,
            Self::NotSelected { .. } | Self::MoveInProgress | Self::ZeroDistance => {
                ErrorSeverity::Validation
            }
            Self::AtomOutOfBounds { .. } | Self::AtomOnWall { .. } | Self::AtomsOverlap { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "BOARD_INVALID_INDEX",
            Self::NotSelected { .. } => "BOARD_NOT_SELECTED",
            Self::MoveInProgress => "BOARD_MOVE_IN_PROGRESS",
            Self::ZeroDistance => "BOARD_ZERO_DISTANCE",
            Self::AtomOutOfBounds { .. } => "BOARD_ATOM_OUT_OF_BOUNDS",
            Self::AtomOnWall { .. } => "BOARD_ATOM_ON_WALL",
            Self::AtomsOverlap { .. } => "BOARD_ATOMS_OVERLAP",
        }
    }
}
