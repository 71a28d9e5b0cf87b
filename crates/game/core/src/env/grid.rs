use crate::state::Position;

/// Static wall mask of the square playing field.
///
/// Built once when a level is loaded and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: u32,
    /// Row-major wall flags, `walls[y * size + x]`.
    walls: Vec<bool>,
}

impl Grid {
    /// Creates a field of the given size with no walls.
    pub fn open(size: u32) -> Self {
        Self {
            size,
            walls: vec![false; (size as usize) * (size as usize)],
        }
    }

    /// Creates a field with walls at the given positions. Positions outside
    /// the field are ignored.
    pub fn with_walls(size: u32, walls: impl IntoIterator<Item = Position>) -> Self {
        let mut grid = Self::open(size);
        for position in walls {
            grid.set_wall(position);
        }
        grid
    }

    pub(crate) fn set_wall(&mut self, position: Position) {
        if let Some(index) = self.index(position) {
            self.walls[index] = true;
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.size as i32
            && position.y < self.size as i32
    }

    /// Returns true for wall cells and for every position off the field,
    /// so slide scans can stop at the border without a separate check.
    pub fn is_wall(&self, position: Position) -> bool {
        self.index(position).is_none_or(|index| self.walls[index])
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| **wall).count()
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.size as usize + position.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_blocked() {
        let grid = Grid::open(4);
        assert!(!grid.is_wall(Position::new(0, 0)));
        assert!(!grid.is_wall(Position::new(3, 3)));
        assert!(grid.is_wall(Position::new(-1, 0)));
        assert!(grid.is_wall(Position::new(0, 4)));
        assert!(grid.is_wall(Position::new(4, 2)));
    }

    #[test]
    fn walls_are_addressed_by_column_and_row() {
        let grid = Grid::with_walls(4, [Position::new(1, 2), Position::new(9, 9)]);
        assert!(grid.is_wall(Position::new(1, 2)));
        assert!(!grid.is_wall(Position::new(2, 1)));
        assert_eq!(grid.wall_count(), 1);
    }
}
