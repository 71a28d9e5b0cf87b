use std::num::NonZeroU32;

use crate::action::Direction;
use crate::state::AtomHandle;

/// One committed slide, replayable for undo and redo.
///
/// The distance is non-zero by construction: blocked slides never produce
/// a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub atom: AtomHandle,
    pub direction: Direction,
    pub distance: NonZeroU32,
}

impl MoveRecord {
    /// Returns `None` for a zero distance.
    pub fn new(atom: AtomHandle, direction: Direction, distance: u32) -> Option<Self> {
        NonZeroU32::new(distance).map(|distance| Self {
            atom,
            direction,
            distance,
        })
    }

    /// Cell offset the record applies when replayed forwards.
    pub fn delta(&self) -> (i32, i32) {
        let (dx, dy) = self.direction.delta();
        let distance = i32::try_from(self.distance.get()).unwrap_or(i32::MAX);
        (dx.saturating_mul(distance), dy.saturating_mul(distance))
    }
}

/// Linear undo/redo log.
///
/// A record lives on at most one of the two stacks at any time; moving it
/// between them is the only way either stack changes, except that `record`
/// drops the redo stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    undo: Vec<MoveRecord>,
    redo: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from persisted undo entries (oldest first).
    /// Redo history is never persisted, so the redo stack starts empty.
    pub fn from_undo(entries: Vec<MoveRecord>) -> Self {
        Self {
            undo: entries,
            redo: Vec::new(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo entries, oldest first.
    pub fn undo_entries(&self) -> &[MoveRecord] {
        &self.undo
    }

    /// Redo entries, the next one to redo last.
    pub fn redo_entries(&self) -> &[MoveRecord] {
        &self.redo
    }

    pub fn peek_undo(&self) -> Option<&MoveRecord> {
        self.undo.last()
    }

    pub fn peek_redo(&self) -> Option<&MoveRecord> {
        self.redo.last()
    }

    /// Records a fresh interactive move. Fresh moves discard redo history.
    pub fn record(&mut self, record: MoveRecord) {
        self.redo.clear();
        self.undo.push(record);
    }

    /// Moves the newest undo entry onto the redo stack and returns it.
    pub fn step_back(&mut self) -> Option<MoveRecord> {
        let record = self.undo.pop()?;
        self.redo.push(record);
        Some(record)
    }

    /// Moves the newest redo entry back onto the undo stack and returns it.
    pub fn step_forward(&mut self) -> Option<MoveRecord> {
        let record = self.redo.pop()?;
        self.undo.push(record);
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(atom: u32, direction: Direction, distance: u32) -> MoveRecord {
        MoveRecord::new(AtomHandle(atom), direction, distance).unwrap()
    }

    #[test]
    fn zero_distance_never_becomes_a_record() {
        assert!(MoveRecord::new(AtomHandle(0), Direction::Up, 0).is_none());
        assert_eq!(record(0, Direction::Up, 3).delta(), (0, -3));
    }

    #[test]
    fn huge_distance_delta_saturates() {
        assert_eq!(record(0, Direction::Left, u32::MAX).delta(), (-i32::MAX, 0));
        assert_eq!(record(0, Direction::Down, 1 << 31).delta(), (0, i32::MAX));
    }

    #[test]
    fn records_move_between_stacks() {
        let mut history = History::new();
        history.record(record(0, Direction::Left, 1));
        history.record(record(1, Direction::Down, 2));

        assert_eq!(history.step_back(), Some(record(1, Direction::Down, 2)));
        assert_eq!(history.undo_entries(), &[record(0, Direction::Left, 1)]);
        assert_eq!(history.redo_entries(), &[record(1, Direction::Down, 2)]);

        assert_eq!(history.step_forward(), Some(record(1, Direction::Down, 2)));
        assert!(!history.can_redo());
        assert_eq!(history.undo_entries().len(), 2);
    }

    #[test]
    fn fresh_record_drops_redo() {
        let mut history = History::new();
        history.record(record(0, Direction::Left, 1));
        history.step_back();
        assert!(history.can_redo());

        history.record(record(0, Direction::Right, 4));
        assert!(!history.can_redo());
        assert_eq!(history.step_forward(), None);
    }

    #[test]
    fn empty_stacks_yield_nothing() {
        let mut history = History::new();
        assert_eq!(history.step_back(), None);
        assert_eq!(history.step_forward(), None);
        assert!(!history.can_undo());
    }
}
