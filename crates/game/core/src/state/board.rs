use std::num::NonZeroU32;

use crate::action::Direction;
use crate::env::{AtomKindId, Grid, Level};
use crate::state::{AtomHandle, BoardError, Position};

/// A placed atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom {
    pub position: Position,
    pub kind: AtomKindId,
}

/// A slide that has been applied to the board but not yet acknowledged by
/// the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InFlightMove {
    pub atom: AtomHandle,
    pub direction: Direction,
    pub distance: NonZeroU32,
    pub origin: Position,
    pub destination: Position,
}

/// Transaction state of the board.
///
/// While a move is in flight every mutating request is rejected until
/// [`Board::complete_move`] returns the board to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveTransaction {
    #[default]
    Idle,
    InFlight(InFlightMove),
}

/// Live placement of atoms plus the selection cursor.
///
/// The atom list is created from the level and never resized; positions are
/// the only thing moves change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    atoms: Vec<Atom>,
    selected: Option<AtomHandle>,
    transaction: MoveTransaction,
}

impl Board {
    /// Places every atom at its starting cell with nothing selected.
    pub fn new(level: &Level) -> Self {
        let atoms = level
            .initial_atoms()
            .iter()
            .map(|spec| Atom {
                position: spec.position,
                kind: spec.kind,
            })
            .collect();
        Self {
            atoms,
            selected: None,
            transaction: MoveTransaction::Idle,
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, handle: AtomHandle) -> Option<&Atom> {
        self.atoms.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = AtomHandle> + '_ {
        (0..self.atoms.len()).map(AtomHandle::from_index)
    }

    pub fn positions(&self) -> Vec<Position> {
        self.atoms.iter().map(|atom| atom.position).collect()
    }

    pub fn selected_atom(&self) -> Option<AtomHandle> {
        self.selected
    }

    /// Selects `handle`. Returns `Ok(false)` when nothing changed, either
    /// because the atom was already selected or a move is in flight.
    pub fn select_atom(&mut self, handle: AtomHandle) -> Result<bool, BoardError> {
        self.validate_handle(handle)?;
        if self.is_moving() || self.selected == Some(handle) {
            return Ok(false);
        }
        self.selected = Some(handle);
        Ok(true)
    }

    pub(crate) fn set_selected(&mut self, selected: Option<AtomHandle>) {
        self.selected = selected;
    }

    /// True iff the cell is inside the field, not a wall and holds no atom.
    pub fn is_cell_empty(&self, grid: &Grid, position: Position) -> bool {
        !grid.is_wall(position) && self.atom_at(position).is_none()
    }

    /// Checks that every cell an atom would cross sliding `distance` cells
    /// in `direction` is free, without moving it.
    pub fn check_path(
        &self,
        grid: &Grid,
        handle: AtomHandle,
        direction: Direction,
        distance: u32,
    ) -> Result<(), BoardError> {
        self.validate_handle(handle)?;
        let origin = self.atoms[handle.index()].position;
        for step in 1..=distance {
            let position = origin.shifted(direction, step);
            if !grid.contains(position) {
                return Err(BoardError::AtomOutOfBounds {
                    atom: handle,
                    position,
                });
            }
            if grid.is_wall(position) {
                return Err(BoardError::AtomOnWall {
                    atom: handle,
                    position,
                });
            }
            if let Some(other) = self.atom_at(position) {
                return Err(BoardError::AtomsOverlap {
                    first: other,
                    second: handle,
                    position,
                });
            }
        }
        Ok(())
    }

    pub fn atom_at(&self, position: Position) -> Option<AtomHandle> {
        self.atoms
            .iter()
            .position(|atom| atom.position == position)
            .map(AtomHandle::from_index)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.transaction, MoveTransaction::InFlight(_))
    }

    pub fn in_flight(&self) -> Option<&InFlightMove> {
        match &self.transaction {
            MoveTransaction::InFlight(mv) => Some(mv),
            MoveTransaction::Idle => None,
        }
    }

    pub fn transaction(&self) -> MoveTransaction {
        self.transaction
    }

    /// Moves the selected atom `distance` cells and opens a move transaction.
    ///
    /// Legality of the destination is the caller's responsibility: interactive
    /// moves measure it first, undo/redo replay recorded distances.
    pub fn begin_move(
        &mut self,
        handle: AtomHandle,
        direction: Direction,
        distance: u32,
    ) -> Result<InFlightMove, BoardError> {
        self.validate_handle(handle)?;
        if self.is_moving() {
            return Err(BoardError::MoveInProgress);
        }
        if self.selected != Some(handle) {
            return Err(BoardError::NotSelected { atom: handle });
        }
        let distance = NonZeroU32::new(distance).ok_or(BoardError::ZeroDistance)?;

        let atom = &mut self.atoms[handle.index()];
        let origin = atom.position;
        let destination = origin.shifted(direction, distance.get());
        atom.position = destination;

        let mv = InFlightMove {
            atom: handle,
            direction,
            distance,
            origin,
            destination,
        };
        self.transaction = MoveTransaction::InFlight(mv);
        Ok(mv)
    }

    /// Closes the open move transaction and re-checks the board invariants.
    ///
    /// Returns `Ok(None)` when no move was in flight.
    pub fn complete_move(&mut self, grid: &Grid) -> Result<Option<InFlightMove>, BoardError> {
        let MoveTransaction::InFlight(mv) = core::mem::take(&mut self.transaction) else {
            return Ok(None);
        };
        self.check_invariants(grid)?;
        Ok(Some(mv))
    }

    /// Shifts an atom without opening a transaction (bulk undo/redo).
    pub(crate) fn translate(&mut self, handle: AtomHandle, dx: i32, dy: i32) {
        if let Some(atom) = self.atoms.get_mut(handle.index()) {
            atom.position = Position::new(
                atom.position.x.saturating_add(dx),
                atom.position.y.saturating_add(dy),
            );
        }
    }

    pub(crate) fn set_positions(&mut self, positions: &[Position]) {
        for (atom, position) in self.atoms.iter_mut().zip(positions) {
            atom.position = *position;
        }
    }

    /// Verifies that every atom is on a free in-bounds cell, no two atoms
    /// share a cell and the selection points at an existing atom.
    pub fn check_invariants(&self, grid: &Grid) -> Result<(), BoardError> {
        if let Some(selected) = self.selected {
            self.validate_handle(selected)?;
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            let handle = AtomHandle::from_index(index);
            if !grid.contains(atom.position) {
                return Err(BoardError::AtomOutOfBounds {
                    atom: handle,
                    position: atom.position,
                });
            }
            if grid.is_wall(atom.position) {
                return Err(BoardError::AtomOnWall {
                    atom: handle,
                    position: atom.position,
                });
            }
            if let Some(first) = self.atoms[..index]
                .iter()
                .position(|other| other.position == atom.position)
            {
                return Err(BoardError::AtomsOverlap {
                    first: AtomHandle::from_index(first),
                    second: handle,
                    position: atom.position,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn validate_handle(&self, handle: AtomHandle) -> Result<(), BoardError> {
        if handle.index() < self.atoms.len() {
            Ok(())
        } else {
            Err(BoardError::InvalidIndex {
                atom: handle,
                atom_count: self.atoms.len(),
            })
        }
    }
}
