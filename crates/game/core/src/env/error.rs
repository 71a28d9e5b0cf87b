use crate::env::AtomKindId;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AtomHandle, Position};

/// Errors raised while turning a level description into a playable [`Level`](super::Level).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelError {
    #[error("field has {found} rows, expected {expected}")]
    WrongRowCount { expected: u32, found: usize },

    #[error("field row {row} has {found} cells, expected {expected}")]
    WrongRowWidth {
        row: usize,
        expected: u32,
        found: usize,
    },

    #[error("unknown atom symbol {symbol:?} at column {column}, row {row}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },

    #[error("symbol {0:?} is reserved for walls and empty cells")]
    ReservedSymbol(char),

    #[error("atom {symbol:?} uses unknown bond code {code:?}")]
    UnknownBondCode { symbol: char, code: char },

    #[error("level defines {0} atom kinds, more than supported")]
    TooManyKinds(usize),

    #[error("field contains no atoms")]
    NoAtoms,

    #[error("goal molecule is empty")]
    EmptyMolecule,

    #[error("goal molecule lists offset {offset} twice")]
    DuplicateMoleculeCell { offset: Position },

    #[error("atom kind {0:?} is not defined by the molecule")]
    UnknownKind(AtomKindId),

    #[error("atom {atom} at {position} lies outside the field")]
    AtomOutOfBounds { atom: AtomHandle, position: Position },

    #[error("atom {atom} at {position} sits on a wall")]
    AtomOnWall { atom: AtomHandle, position: Position },

    #[error("atoms {first} and {second} both occupy {position}")]
    AtomsOverlap {
        first: AtomHandle,
        second: AtomHandle,
        position: Position,
    },
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongRowCount { .. } => "LEVEL_WRONG_ROW_COUNT",
            Self::WrongRowWidth { .. } => "LEVEL_WRONG_ROW_WIDTH",
            Self::UnknownSymbol { .. } => "LEVEL_UNKNOWN_SYMBOL",
            Self::ReservedSymbol(_) => "LEVEL_RESERVED_SYMBOL",
            Self::UnknownBondCode { .. } => "LEVEL_UNKNOWN_BOND_CODE",
            Self::TooManyKinds(_) => "LEVEL_TOO_MANY_KINDS",
            Self::NoAtoms => "LEVEL_NO_ATOMS",
            Self::EmptyMolecule => "LEVEL_EMPTY_MOLECULE",
            Self::DuplicateMoleculeCell { .. } => "LEVEL_DUPLICATE_MOLECULE_CELL",
            Self::UnknownKind(_) => "LEVEL_UNKNOWN_KIND",
            Self::AtomOutOfBounds { .. } => "LEVEL_ATOM_OUT_OF_BOUNDS",
            Self::AtomOnWall { .. } => "LEVEL_ATOM_ON_WALL",
            Self::AtomsOverlap { .. } => "LEVEL_ATOMS_OVERLAP",
        }
    }
}
