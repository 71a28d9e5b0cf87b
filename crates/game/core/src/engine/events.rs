use crate::state::{AtomHandle, InFlightMove};

/// Notification for the view layer.
///
/// Events are returned from engine calls in the order they happened. The
/// engine never waits on their delivery and emits availability events only
/// when the availability actually flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The counted number of moves changed.
    MovesChanged { moves: u32 },
    /// Undo became possible (`true`) or impossible (`false`).
    UndoAvailable(bool),
    /// Redo became possible (`true`) or impossible (`false`).
    RedoAvailable(bool),
    /// The selection cursor moved.
    SelectionChanged(Option<AtomHandle>),
    /// A slide started; the view should animate it and then call
    /// `complete_move`.
    MoveStarted(InFlightMove),
    /// The board matches the goal molecule.
    GameOver { moves: u32 },
}
