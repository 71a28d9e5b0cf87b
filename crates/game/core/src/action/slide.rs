use crate::action::Direction;
use crate::env::Grid;
use crate::state::{AtomHandle, Board, BoardError, InFlightMove};

/// Counts the empty cells ahead of `atom` in `direction`.
///
/// The scan walks one cell at a time and stops at the first wall, border
/// cell or atom; any other atom can be the obstacle, so there is no closed
/// form. Zero means the slide is blocked.
pub fn compute_slide(
    grid: &Grid,
    board: &Board,
    atom: AtomHandle,
    direction: Direction,
) -> Result<u32, BoardError> {
    let origin = board
        .atom(atom)
        .ok_or(BoardError::InvalidIndex {
            atom,
            atom_count: board.len(),
        })?
        .position;

    let mut distance = 0;
    let mut cursor = origin.step(direction);
    while board.is_cell_empty(grid, cursor) {
        distance += 1;
        cursor = cursor.step(direction);
    }
    Ok(distance)
}

/// Translates the selected `atom` by `distance` cells and opens a move
/// transaction. Does not check that the path is free.
pub fn apply_move(
    board: &mut Board,
    atom: AtomHandle,
    direction: Direction,
    distance: u32,
) -> Result<InFlightMove, BoardError> {
    board.begin_move(atom, direction, distance)
}
