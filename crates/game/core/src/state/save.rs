//! Saved-game snapshot and its validation.
//!
//! Atoms are referenced by their index in the level's atom list, never by
//! kind: kinds repeat, indices do not. Only undo history is persisted.

use crate::action::Direction;
use crate::env::Level;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AtomHandle, Board, History, MoveRecord, Position, PuzzleState};

/// Persisted undo entry with the direction stored as its numeric code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedMove {
    pub atom: u32,
    pub direction: u8,
    pub distance: u32,
}

impl From<&MoveRecord> for SavedMove {
    fn from(record: &MoveRecord) -> Self {
        Self {
            atom: record.atom.0,
            direction: record.direction.code(),
            distance: record.distance.get(),
        }
    }
}

/// Everything needed to resume a level where the player left it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedGame {
    /// Current cell of every atom, indexed like the level's atom list.
    pub positions: Vec<Position>,
    pub move_count: u32,
    /// Undo stack, oldest entry first.
    pub moves: Vec<SavedMove>,
    pub selected: Option<u32>,
}

/// Reasons a saved game cannot be restored onto the loaded level.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SaveError {
    #[error("corrupt save: {found} atom positions for a level with {expected} atoms")]
    AtomCountMismatch { expected: usize, found: usize },

    #[error("corrupt save: atom {atom} at {position} lies outside the field")]
    PositionOutOfBounds { atom: AtomHandle, position: Position },

    #[error("corrupt save: atom {atom} at {position} sits on a wall")]
    PositionOnWall { atom: AtomHandle, position: Position },

    #[error("corrupt save: atoms {first} and {second} both occupy {position}")]
    OverlappingAtoms {
        first: AtomHandle,
        second: AtomHandle,
        position: Position,
    },

    #[error("corrupt save: move {entry} references missing atom #{atom}")]
    InvalidAtomIndex { entry: usize, atom: u32 },

    #[error("corrupt save: move {entry} has unknown direction code {code}")]
    InvalidDirectionCode { entry: usize, code: u8 },

    #[error("corrupt save: move {entry} has zero distance")]
    ZeroDistance { entry: usize },

    #[error("corrupt save: move {entry} slides {distance} cells on a field of size {size}")]
    DistanceTooLong {
        entry: usize,
        distance: u32,
        size: u32,
    },

    #[error("corrupt save: undoing move {entry} would put atom {atom} on blocked cell {position}")]
    InconsistentHistory {
        entry: usize,
        atom: AtomHandle,
        position: Position,
    },

    #[error("corrupt save: move count {move_count} disagrees with {entries} stored moves")]
    MoveCountMismatch { move_count: u32, entries: usize },

    #[error("corrupt save: selected atom #{0} does not exist")]
    InvalidSelection(u32),
}

impl GameError for SaveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AtomCountMismatch { .. } => "SAVE_ATOM_COUNT_MISMATCH",
            Self::PositionOutOfBounds { .. } => "SAVE_POSITION_OUT_OF_BOUNDS",
            Self::PositionOnWall { .. } => "SAVE_POSITION_ON_WALL",
            Self::OverlappingAtoms { .. } => "SAVE_OVERLAPPING_ATOMS",
            Self::InvalidAtomIndex { .. } => "SAVE_INVALID_ATOM_INDEX",
            Self::InvalidDirectionCode { .. } => "SAVE_INVALID_DIRECTION_CODE",
            Self::ZeroDistance { .. } => "SAVE_ZERO_DISTANCE",
            Self::DistanceTooLong { .. } => "SAVE_DISTANCE_TOO_LONG",
            Self::InconsistentHistory { .. } => "SAVE_INCONSISTENT_HISTORY",
            Self::MoveCountMismatch { .. } => "SAVE_MOVE_COUNT_MISMATCH",
            Self::InvalidSelection(_) => "SAVE_INVALID_SELECTION",
        }
    }
}

impl SavedGame {
    /// Snapshots the current state. An in-flight move is saved as if it
    /// had already completed.
    pub fn capture(state: &PuzzleState) -> Self {
        Self {
            positions: state.board.positions(),
            move_count: state.move_count,
            moves: state
                .history
                .undo_entries()
                .iter()
                .map(SavedMove::from)
                .collect(),
            selected: state.board.selected_atom().map(|handle| handle.0),
        }
    }

    /// Validates the snapshot against `level` and builds the resumed state.
    ///
    /// Nothing is constructed until every field has been checked.
    pub fn restore(&self, level: &Level) -> Result<PuzzleState, SaveError> {
        let atom_count = level.atom_count();
        if self.positions.len() != atom_count {
            return Err(SaveError::AtomCountMismatch {
                expected: atom_count,
                found: self.positions.len(),
            });
        }

        let grid = level.grid();
        for (index, &position) in self.positions.iter().enumerate() {
            let atom = AtomHandle::from_index(index);
            if !grid.contains(position) {
                return Err(SaveError::PositionOutOfBounds { atom, position });
            }
            if grid.is_wall(position) {
                return Err(SaveError::PositionOnWall { atom, position });
            }
            if let Some(first) = self.positions[..index].iter().position(|p| *p == position) {
                return Err(SaveError::OverlappingAtoms {
                    first: AtomHandle::from_index(first),
                    second: atom,
                    position,
                });
            }
        }

        if self.move_count as usize != self.moves.len() {
            return Err(SaveError::MoveCountMismatch {
                move_count: self.move_count,
                entries: self.moves.len(),
            });
        }

        let mut records = Vec::with_capacity(self.moves.len());
        for (entry, saved) in self.moves.iter().enumerate() {
            if saved.atom as usize >= atom_count {
                return Err(SaveError::InvalidAtomIndex {
                    entry,
                    atom: saved.atom,
                });
            }
            let direction =
                Direction::from_code(saved.direction).ok_or(SaveError::InvalidDirectionCode {
                    entry,
                    code: saved.direction,
                })?;
            let record = MoveRecord::new(AtomHandle(saved.atom), direction, saved.distance)
                .ok_or(SaveError::ZeroDistance { entry })?;
            if saved.distance >= grid.size() {
                return Err(SaveError::DistanceTooLong {
                    entry,
                    distance: saved.distance,
                    size: grid.size(),
                });
            }
            records.push(record);
        }
        Self::replay_undo(level, &self.positions, &records)?;

        let selected = match self.selected {
            Some(index) if index as usize >= atom_count => {
                return Err(SaveError::InvalidSelection(index));
            }
            other => other.map(AtomHandle),
        };

        let mut board = Board::new(level);
        board.set_positions(&self.positions);
        board.set_selected(selected);

        Ok(PuzzleState {
            board,
            history: History::from_undo(records),
            move_count: self.move_count,
        })
    }

    /// Walks the undo entries backwards from `positions` and checks that
    /// every slide they describe crossed only free cells.
    fn replay_undo(
        level: &Level,
        positions: &[Position],
        records: &[MoveRecord],
    ) -> Result<(), SaveError> {
        let grid = level.grid();
        let mut scratch = positions.to_vec();
        for (entry, record) in records.iter().enumerate().rev() {
            let index = record.atom.index();
            let back = record.direction.inverse();
            let from = scratch[index];
            for step in 1..=record.distance.get() {
                let cell = from.shifted(back, step);
                let occupied = scratch
                    .iter()
                    .enumerate()
                    .any(|(other, &position)| other != index && position == cell);
                if grid.is_wall(cell) || occupied {
                    return Err(SaveError::InconsistentHistory {
                        entry,
                        atom: record.atom,
                        position: cell,
                    });
                }
            }
            scratch[index] = from.shifted(back, record.distance.get());
        }
        Ok(())
    }
}
