//! Mutable puzzle state.
//!
//! This module owns the board (atom placement, selection, move
//! transaction), the undo/redo history and the saved-game format. Callers
//! read this state freely but mutate it exclusively through the engine.
mod board;
mod common;
mod error;
mod history;
mod save;

pub use board::{Atom, Board, InFlightMove, MoveTransaction};
pub use common::{AtomHandle, Position};
pub use error::BoardError;
pub use history::{History, MoveRecord};
pub use save::{SaveError, SavedGame, SavedMove};

use crate::env::Level;

/// Complete state of a level in play.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleState {
    pub board: Board,
    pub history: History,
    /// Moves currently counted against the player (undo decrements it).
    pub move_count: u32,
}

impl PuzzleState {
    /// Fresh state for a newly loaded level: initial layout, empty history.
    pub fn new(level: &Level) -> Self {
        Self {
            board: Board::new(level),
            history: History::new(),
            move_count: 0,
        }
    }
}
