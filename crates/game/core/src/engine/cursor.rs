//! Deterministic atom traversal for "next"/"previous" selection.
//!
//! Both scans are column-major: they walk down (or up) the current column
//! starting next to the selected atom, then continue in the following (or
//! preceding) column, wrapping around the field.

use crate::env::Level;
use crate::state::{AtomHandle, Board, Position};

/// Atom after the current selection in column-major order.
///
/// With nothing selected this is the first atom of the level.
pub fn next_atom(level: &Level, board: &Board) -> Option<AtomHandle> {
    let Some(selected) = board.selected_atom() else {
        return board.handles().next();
    };
    let current = board.atom(selected)?.position;
    let size = level.grid().size() as i32;

    let mut x = current.x;
    let mut first_row = current.y + 1;
    // One full lap plus the current column always reaches the selected atom.
    for _ in 0..=size {
        for y in first_row..size {
            if let Some(handle) = board.atom_at(Position::new(x, y)) {
                return Some(handle);
            }
        }
        x = (x + 1) % size;
        first_row = 0;
    }
    None
}

/// Atom before the current selection in reverse column-major order.
///
/// Only atoms whose kind the molecule knows are eligible.
pub fn previous_atom(level: &Level, board: &Board) -> Option<AtomHandle> {
    let Some(selected) = board.selected_atom() else {
        return board.handles().next();
    };
    let current = board.atom(selected)?.position;
    let size = level.grid().size() as i32;

    let mut x = current.x;
    let mut last_row = current.y - 1;
    for _ in 0..=size {
        for y in (0..=last_row).rev() {
            let Some(handle) = board.atom_at(Position::new(x, y)) else {
                continue;
            };
            let known = board
                .atom(handle)
                .is_some_and(|atom| level.molecule().kind(atom.kind).is_some());
            if known {
                return Some(handle);
            }
        }
        x = if x == 0 { size - 1 } else { x - 1 };
        last_row = size - 1;
    }
    None
}
