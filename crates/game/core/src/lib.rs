//! Deterministic puzzle rules for the atom sliding game.
//!
//! `atomix-core` defines the board model (walls, atoms, goal molecule), the
//! slide rules, the undo/redo log, the selection cursor and the win check.
//! It performs no I/O. All state mutation flows through
//! [`engine::GameEngine`]; content loaders and clients depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Direction, apply_move, compute_slide};
pub use config::{AnimationSpeed, GameConfig};
pub use engine::{EngineError, EngineResult, GameEngine, GameEvent, check_done};
pub use env::{
    AtomDescription, AtomKind, AtomKindId, AtomSpec, Bond, BondOrder, Element, Grid, Heading,
    Level, LevelDescription, LevelError, Molecule, MoleculeCell,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Atom, AtomHandle, Board, BoardError, History, InFlightMove, MoveRecord, MoveTransaction,
    Position, PuzzleState, SaveError, SavedGame, SavedMove,
};
