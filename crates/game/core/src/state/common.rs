use std::fmt;

use crate::action::Direction;

/// Stable identity of an atom: its index in the level's atom list.
///
/// Atoms are never added or removed while a level is played, so the index
/// stays valid for the whole session and doubles as the saved-game key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomHandle(pub u32);

impl AtomHandle {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for AtomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
///
/// `x` grows to the right, `y` grows downwards (row 0 is the top row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position reached after travelling `distance` cells in `direction`.
    ///
    /// Saturates at the `i32` range; such positions are off every field.
    pub fn shifted(self, direction: Direction, distance: u32) -> Self {
        let (dx, dy) = direction.delta();
        let distance = i32::try_from(distance).unwrap_or(i32::MAX);
        Self::new(
            self.x.saturating_add(dx.saturating_mul(distance)),
            self.y.saturating_add(dy.saturating_mul(distance)),
        )
    }

    /// Adjacent position one cell away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self.shifted(direction, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
