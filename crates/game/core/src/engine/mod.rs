//! Move transactions, undo/redo and win detection.
//!
//! The [`GameEngine`] is the only writer of [`PuzzleState`]. Every mutating
//! call returns the [`GameEvent`]s it produced; calls that are not allowed
//! right now (a move is still in flight, the slide is blocked, the stack is
//! empty) return an empty list and leave the state untouched.

mod cursor;
mod errors;
mod events;
mod win;

pub use cursor::{next_atom, previous_atom};
pub use errors::EngineError;
pub use events::GameEvent;
pub use win::check_done;

use crate::action::{self, Direction};
use crate::env::Level;
use crate::state::{AtomHandle, MoveRecord, PuzzleState, SavedGame};

/// Result of a mutating engine call.
pub type EngineResult = Result<Vec<GameEvent>, EngineError>;

/// Game engine driving one level.
///
/// The level is shared read-only; the state is borrowed mutably for the
/// lifetime of the engine, so nothing else can change it behind its back.
pub struct GameEngine<'a> {
    level: &'a Level,
    state: &'a mut PuzzleState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given level and state.
    pub fn new(level: &'a Level, state: &'a mut PuzzleState) -> Self {
        Self { level, state }
    }

    pub fn level(&self) -> &Level {
        self.level
    }

    pub fn state(&self) -> &PuzzleState {
        self.state
    }

    pub fn selected_atom(&self) -> Option<AtomHandle> {
        self.state.board.selected_atom()
    }

    pub fn is_moving(&self) -> bool {
        self.state.board.is_moving()
    }

    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    pub fn is_solved(&self) -> bool {
        check_done(&self.state.board, self.level.molecule())
    }

    /// Distance the selected atom would slide in `direction`; zero when
    /// blocked or when nothing is selected.
    pub fn slide_distance(&self, direction: Direction) -> u32 {
        self.selected_atom()
            .and_then(|atom| {
                action::compute_slide(self.level.grid(), &self.state.board, atom, direction).ok()
            })
            .unwrap_or(0)
    }

    /// Directions in which the selected atom can move at least one cell.
    ///
    /// Empty while a move is in flight or nothing is selected.
    pub fn movable_directions(&self) -> Vec<Direction> {
        if self.is_moving() {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|direction| self.slide_distance(*direction) > 0)
            .collect()
    }

    /// Selects an atom explicitly (e.g. clicked by the player).
    ///
    /// Fails for an unknown atom; ignored while a move is in flight.
    pub fn select_atom(&mut self, atom: AtomHandle) -> EngineResult {
        let changed = self.state.board.select_atom(atom)?;
        Ok(if changed {
            vec![GameEvent::SelectionChanged(Some(atom))]
        } else {
            Vec::new()
        })
    }

    /// Moves the selection cursor to the next atom in column-major order.
    pub fn select_next(&mut self) -> Vec<GameEvent> {
        if self.is_moving() {
            return Vec::new();
        }
        let next = next_atom(self.level, &self.state.board);
        self.reselect(next)
    }

    /// Moves the selection cursor to the previous atom in column-major order.
    pub fn select_previous(&mut self) -> Vec<GameEvent> {
        if self.is_moving() {
            return Vec::new();
        }
        let previous = previous_atom(self.level, &self.state.board);
        self.reselect(previous)
    }

    /// Slides the selected atom as far as it goes in `direction`.
    ///
    /// A successful slide drops the redo history, records the move, counts
    /// it and leaves the board in flight until [`Self::complete_move`].
    pub fn interactive_move(&mut self, direction: Direction) -> EngineResult {
        if self.is_moving() {
            return Ok(Vec::new());
        }
        let Some(atom) = self.selected_atom() else {
            return Ok(Vec::new());
        };

        let distance =
            action::compute_slide(self.level.grid(), &self.state.board, atom, direction)?;
        let Some(record) = MoveRecord::new(atom, direction, distance) else {
            return Ok(Vec::new());
        };

        let before = self.availability();
        let mv = action::apply_move(&mut self.state.board, atom, direction, distance)?;
        self.state.history.record(record);
        self.state.move_count += 1;

        let mut events = Vec::new();
        self.push_availability(before, &mut events);
        events.push(GameEvent::MovesChanged {
            moves: self.state.move_count,
        });
        events.push(GameEvent::MoveStarted(mv));
        Ok(events)
    }

    /// Acknowledges that the view finished playing back the in-flight move.
    ///
    /// Re-checks the board invariants and runs the win detector. Does
    /// nothing when no move is in flight.
    pub fn complete_move(&mut self) -> EngineResult {
        if self.state.board.complete_move(self.level.grid())?.is_none() {
            return Ok(Vec::new());
        }
        let mut events = Vec::new();
        self.push_game_over(&mut events);
        Ok(events)
    }

    /// Reverses the newest recorded move and selects the atom it moved.
    pub fn undo(&mut self) -> EngineResult {
        if self.is_moving() {
            return Ok(Vec::new());
        }
        let Some(record) = self.state.history.peek_undo().copied() else {
            return Ok(Vec::new());
        };
        self.state.board.check_path(
            self.level.grid(),
            record.atom,
            record.direction.inverse(),
            record.distance.get(),
        )?;

        let before = self.availability();
        self.state.history.step_back();
        self.state.move_count = self.state.move_count.saturating_sub(1);
        self.replay(record, record.direction.inverse(), before)
    }

    /// Re-applies the newest undone move and selects the atom it moved.
    pub fn redo(&mut self) -> EngineResult {
        if self.is_moving() {
            return Ok(Vec::new());
        }
        let Some(record) = self.state.history.peek_redo().copied() else {
            return Ok(Vec::new());
        };
        self.state.board.check_path(
            self.level.grid(),
            record.atom,
            record.direction,
            record.distance.get(),
        )?;

        let before = self.availability();
        self.state.history.step_forward();
        self.state.move_count += 1;
        self.replay(record, record.direction, before)
    }

    /// Undoes every recorded move at once, without in-flight transactions.
    ///
    /// The final layout is computed on a copy of the board and checked
    /// before history, counter or positions change.
    pub fn undo_all(&mut self) -> EngineResult {
        if self.is_moving() || !self.state.history.can_undo() {
            return Ok(Vec::new());
        }
        let mut board = self.state.board.clone();
        for record in self.state.history.undo_entries().iter().rev() {
            board.validate_handle(record.atom)?;
            let (dx, dy) = record.delta();
            board.translate(record.atom, -dx, -dy);
        }
        board.check_invariants(self.level.grid())?;

        let before = self.availability();
        let mut last = None;
        while let Some(record) = self.state.history.step_back() {
            self.state.move_count = self.state.move_count.saturating_sub(1);
            last = Some(record.atom);
        }
        self.state.board = board;
        self.finish_bulk(last, before)
    }

    /// Redoes every undone move at once, without in-flight transactions.
    pub fn redo_all(&mut self) -> EngineResult {
        if self.is_moving() || !self.state.history.can_redo() {
            return Ok(Vec::new());
        }
        let mut board = self.state.board.clone();
        for record in self.state.history.redo_entries().iter().rev() {
            board.validate_handle(record.atom)?;
            let (dx, dy) = record.delta();
            board.translate(record.atom, dx, dy);
        }
        board.check_invariants(self.level.grid())?;

        let before = self.availability();
        let mut last = None;
        while let Some(record) = self.state.history.step_forward() {
            self.state.move_count += 1;
            last = Some(record.atom);
        }
        self.state.board = board;
        self.finish_bulk(last, before)
    }

    /// Snapshot of the current game for persistence.
    pub fn save(&self) -> SavedGame {
        SavedGame::capture(self.state)
    }

    /// Replaces the current state with a saved game for this level.
    ///
    /// The save is fully validated first; on error the current state is
    /// left untouched. Emits the complete availability picture so a view
    /// can resynchronise.
    pub fn load_saved(&mut self, saved: &SavedGame) -> EngineResult {
        let restored = saved.restore(self.level)?;
        *self.state = restored;
        Ok(self.snapshot_events())
    }

    /// Restarts the level: initial layout, empty history, first atom selected.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        *self.state = PuzzleState::new(self.level);
        let first = next_atom(self.level, &self.state.board);
        self.state.board.set_selected(first);
        self.snapshot_events()
    }

    fn replay(
        &mut self,
        record: MoveRecord,
        direction: Direction,
        before: (bool, bool),
    ) -> EngineResult {
        let mut events = Vec::new();
        if self.selected_atom() != Some(record.atom) {
            self.state.board.set_selected(Some(record.atom));
            events.push(GameEvent::SelectionChanged(Some(record.atom)));
        }
        let mv = action::apply_move(
            &mut self.state.board,
            record.atom,
            direction,
            record.distance.get(),
        )?;

        self.push_availability(before, &mut events);
        events.push(GameEvent::MovesChanged {
            moves: self.state.move_count,
        });
        events.push(GameEvent::MoveStarted(mv));
        Ok(events)
    }

    fn finish_bulk(&mut self, last: Option<AtomHandle>, before: (bool, bool)) -> EngineResult {
        let mut events = Vec::new();
        if last.is_some() && self.selected_atom() != last {
            self.state.board.set_selected(last);
            events.push(GameEvent::SelectionChanged(last));
        }
        self.state.board.check_invariants(self.level.grid())?;

        self.push_availability(before, &mut events);
        events.push(GameEvent::MovesChanged {
            moves: self.state.move_count,
        });
        self.push_game_over(&mut events);
        Ok(events)
    }

    fn reselect(&mut self, target: Option<AtomHandle>) -> Vec<GameEvent> {
        if target.is_none() || target == self.selected_atom() {
            return Vec::new();
        }
        self.state.board.set_selected(target);
        vec![GameEvent::SelectionChanged(target)]
    }

    fn availability(&self) -> (bool, bool) {
        (
            self.state.history.can_undo(),
            self.state.history.can_redo(),
        )
    }

    fn push_availability(&self, before: (bool, bool), events: &mut Vec<GameEvent>) {
        let (undo, redo) = self.availability();
        if undo != before.0 {
            events.push(GameEvent::UndoAvailable(undo));
        }
        if redo != before.1 {
            events.push(GameEvent::RedoAvailable(redo));
        }
    }

    fn push_game_over(&self, events: &mut Vec<GameEvent>) {
        if self.is_solved() {
            events.push(GameEvent::GameOver {
                moves: self.state.move_count,
            });
        }
    }

    fn snapshot_events(&self) -> Vec<GameEvent> {
        let (undo, redo) = self.availability();
        vec![
            GameEvent::MovesChanged {
                moves: self.state.move_count,
            },
            GameEvent::UndoAvailable(undo),
            GameEvent::RedoAvailable(redo),
            GameEvent::SelectionChanged(self.selected_atom()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AtomKind, AtomKindId, AtomSpec, Element, Grid, Molecule};
    use crate::state::{BoardError, History, Position};

    fn level() -> Level {
        let kinds = vec![
            AtomKind::new('a', Element::Hydrogen, Vec::new()),
            AtomKind::new('b', Element::Oxygen, Vec::new()),
        ];
        let molecule = Molecule::new(
            "pair",
            kinds,
            [
                (Position::new(0, 0), AtomKindId(0)),
                (Position::new(1, 0), AtomKindId(1)),
            ],
        )
        .unwrap();
        Level::new(
            Grid::open(4),
            molecule,
            vec![
                AtomSpec::new(Position::new(0, 0), AtomKindId(0)),
                AtomSpec::new(Position::new(3, 0), AtomKindId(1)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn reset_selects_first_atom() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        let events = GameEngine::new(&level, &mut state).reset();

        assert_eq!(
            events,
            vec![
                GameEvent::MovesChanged { moves: 0 },
                GameEvent::UndoAvailable(false),
                GameEvent::RedoAvailable(false),
                GameEvent::SelectionChanged(Some(AtomHandle(0))),
            ]
        );
        assert_eq!(state.board.selected_atom(), Some(AtomHandle(0)));
    }

    #[test]
    fn move_without_selection_is_ignored() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        let mut engine = GameEngine::new(&level, &mut state);

        assert_eq!(engine.interactive_move(Direction::Right), Ok(Vec::new()));
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn blocked_move_records_nothing() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        let mut engine = GameEngine::new(&level, &mut state);
        engine.reset();

        assert_eq!(engine.interactive_move(Direction::Up), Ok(Vec::new()));
        assert_eq!(engine.interactive_move(Direction::Left), Ok(Vec::new()));
        assert!(!engine.is_moving());
        assert_eq!(engine.move_count(), 0);
        assert!(!engine.state().history.can_undo());
    }

    #[test]
    fn interactive_move_emits_and_blocks_until_completed() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        let mut engine = GameEngine::new(&level, &mut state);
        engine.reset();

        let events = engine.interactive_move(Direction::Down).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], GameEvent::UndoAvailable(true));
        assert_eq!(events[1], GameEvent::MovesChanged { moves: 1 });
        assert!(matches!(events[2], GameEvent::MoveStarted(mv) if mv.distance.get() == 3));

        assert!(engine.movable_directions().is_empty());
        assert_eq!(engine.interactive_move(Direction::Right), Ok(Vec::new()));
        assert_eq!(engine.undo(), Ok(Vec::new()));
        assert_eq!(engine.select_next(), Vec::new());

        assert_eq!(engine.complete_move(), Ok(Vec::new()));
        assert!(!engine.is_moving());
        assert_eq!(engine.complete_move(), Ok(Vec::new()));
    }

    #[test]
    fn select_atom_reports_unknown_index() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        let mut engine = GameEngine::new(&level, &mut state);

        assert_eq!(
            engine.select_atom(AtomHandle(5)),
            Err(EngineError::Board(BoardError::InvalidIndex {
                atom: AtomHandle(5),
                atom_count: 2
            }))
        );
        assert_eq!(
            engine.select_atom(AtomHandle(1)),
            Ok(vec![GameEvent::SelectionChanged(Some(AtomHandle(1)))])
        );
    }

    #[test]
    fn movable_directions_follow_free_neighbours() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        let mut engine = GameEngine::new(&level, &mut state);
        engine.reset();

        assert_eq!(
            engine.movable_directions(),
            vec![Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn undo_reselects_moved_atom() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        let mut engine = GameEngine::new(&level, &mut state);
        engine.reset();

        engine.interactive_move(Direction::Down).unwrap();
        engine.complete_move().unwrap();
        engine.select_atom(AtomHandle(1)).unwrap();

        let events = engine.undo().unwrap();
        assert_eq!(events[0], GameEvent::SelectionChanged(Some(AtomHandle(0))));
        assert!(events.contains(&GameEvent::UndoAvailable(false)));
        assert!(events.contains(&GameEvent::RedoAvailable(true)));
        assert!(events.contains(&GameEvent::MovesChanged { moves: 0 }));
        engine.complete_move().unwrap();

        assert_eq!(
            engine.state().board.atom(AtomHandle(0)).unwrap().position,
            Position::new(0, 0)
        );
    }

    #[test]
    fn unreplayable_history_leaves_state_untouched() {
        let level = level();
        let mut state = PuzzleState::new(&level);
        state.history = History::from_undo(vec![
            MoveRecord::new(AtomHandle(0), Direction::Right, 2).unwrap(),
        ]);
        state.move_count = 1;
        let snapshot = state.clone();
        let mut engine = GameEngine::new(&level, &mut state);

        assert_eq!(
            engine.undo(),
            Err(EngineError::Board(BoardError::AtomOutOfBounds {
                atom: AtomHandle(0),
                position: Position::new(-1, 0)
            }))
        );
        assert!(matches!(
            engine.undo_all(),
            Err(EngineError::Board(BoardError::AtomOutOfBounds { .. }))
        ));
        assert!(!engine.is_moving());
        assert_eq!(engine.state(), &snapshot);
    }
}
