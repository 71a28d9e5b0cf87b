//! Plain-text rendering of boards, molecules and engine events.

use atomix_core::{AtomHandle, Board, GameEvent, Grid, Level, Molecule, Position, PuzzleState};

const WALL: char = '#';
const EMPTY: char = '.';

/// Field rows followed by a status line.
pub fn render_state(level: &Level, state: &PuzzleState) -> String {
    let mut out = render_field(level.grid(), |position| {
        state
            .board
            .atom_at(position)
            .map(|handle| atom_symbol(level, &state.board, handle))
    });

    let selected = match state.board.selected_atom() {
        Some(handle) => describe_atom(level, &state.board, handle),
        None => "nothing".to_owned(),
    };
    out.push_str(&format!(
        "moves: {}  selected: {}\n",
        state.move_count, selected
    ));
    out
}

/// The level's starting field, without status.
pub fn render_initial(level: &Level) -> String {
    render_field(level.grid(), |position| {
        level
            .initial_atoms()
            .iter()
            .find(|spec| spec.position == position)
            .map(|spec| {
                level
                    .molecule()
                    .kind(spec.kind)
                    .map_or('?', |kind| kind.symbol)
            })
    })
}

/// Goal molecule in its normalized bounding box.
pub fn render_molecule(molecule: &Molecule) -> String {
    let mut out = String::new();
    for y in 0..molecule.height() as i32 {
        for x in 0..molecule.width() as i32 {
            let symbol = molecule
                .kind_at(Position::new(x, y))
                .and_then(|id| molecule.kind(id))
                .map_or(EMPTY, |kind| kind.symbol);
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

/// One human-readable line per event.
pub fn describe_event(level: &Level, board: &Board, event: &GameEvent) -> String {
    match event {
        GameEvent::MovesChanged { moves } => format!("moves: {}", moves),
        GameEvent::UndoAvailable(available) => availability("undo", *available),
        GameEvent::RedoAvailable(available) => availability("redo", *available),
        GameEvent::SelectionChanged(Some(handle)) => {
            format!("selected {}", describe_atom(level, board, *handle))
        }
        GameEvent::SelectionChanged(None) => "selection cleared".to_owned(),
        GameEvent::MoveStarted(mv) => format!(
            "{} slides {} by {} {} {} -> {}",
            mv.atom,
            mv.direction,
            mv.distance,
            if mv.distance.get() == 1 { "cell" } else { "cells" },
            mv.origin,
            mv.destination
        ),
        GameEvent::GameOver { moves } => format!("molecule complete in {} moves", moves),
    }
}

fn render_field(grid: &Grid, atom_symbol: impl Fn(Position) -> Option<char>) -> String {
    let size = grid.size() as i32;
    let mut out = String::with_capacity((grid.size() as usize + 1) * grid.size() as usize);
    for y in 0..size {
        for x in 0..size {
            let position = Position::new(x, y);
            let cell = if grid.is_wall(position) {
                WALL
            } else {
                atom_symbol(position).unwrap_or(EMPTY)
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

fn atom_symbol(level: &Level, board: &Board, handle: AtomHandle) -> char {
    board
        .atom(handle)
        .and_then(|atom| level.molecule().kind(atom.kind))
        .map_or('?', |kind| kind.symbol)
}

fn describe_atom(level: &Level, board: &Board, handle: AtomHandle) -> String {
    let Some(atom) = board.atom(handle) else {
        return handle.to_string();
    };
    match level.molecule().kind(atom.kind) {
        Some(kind) => format!(
            "{} '{}' {} at {}",
            handle, kind.symbol, kind.element, atom.position
        ),
        None => format!("{} at {}", handle, atom.position),
    }
}

fn availability(what: &str, available: bool) -> String {
    if available {
        format!("{} available", what)
    } else {
        format!("nothing to {}", what)
    }
}
