use crate::env::Molecule;
use crate::state::{Board, Position};

/// Returns true when the atoms form the goal molecule somewhere on the field.
///
/// The board is translated so its top-left atom bounding corner sits at the
/// origin, then every atom must land on a molecule cell of its own kind.
/// Equal counts plus distinct atom cells make this a bijection, so every
/// goal cell is covered exactly once.
pub fn check_done(board: &Board, molecule: &Molecule) -> bool {
    let atoms = board.atoms();
    if atoms.is_empty() || atoms.len() != molecule.len() {
        return false;
    }

    let min_x = atoms.iter().map(|atom| atom.position.x).min().unwrap_or(0);
    let min_y = atoms.iter().map(|atom| atom.position.y).min().unwrap_or(0);

    atoms.iter().all(|atom| {
        let offset = Position::new(atom.position.x - min_x, atom.position.y - min_y);
        molecule.kind_at(offset) == Some(atom.kind)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AtomKind, AtomKindId, AtomSpec, Element, Grid, Level};

    fn level(atoms: Vec<AtomSpec>) -> Level {
        let kinds = vec![
            AtomKind::new('a', Element::Hydrogen, Vec::new()),
            AtomKind::new('b', Element::Oxygen, Vec::new()),
        ];
        let molecule = Molecule::new(
            "bent",
            kinds,
            [
                (Position::new(0, 0), AtomKindId(0)),
                (Position::new(1, 0), AtomKindId(1)),
                (Position::new(1, 1), AtomKindId(0)),
            ],
        )
        .unwrap();
        Level::new(Grid::open(6), molecule, atoms).unwrap()
    }

    #[test]
    fn matches_shape_anywhere() {
        for (ox, oy) in [(0, 0), (3, 2), (4, 4)] {
            let level = level(vec![
                AtomSpec::new(Position::new(ox, oy), AtomKindId(0)),
                AtomSpec::new(Position::new(ox + 1, oy), AtomKindId(1)),
                AtomSpec::new(Position::new(ox + 1, oy + 1), AtomKindId(0)),
            ]);
            assert!(check_done(&Board::new(&level), level.molecule()));
        }
    }

    #[test]
    fn kinds_must_match_not_just_shape() {
        let level = level(vec![
            AtomSpec::new(Position::new(2, 2), AtomKindId(1)),
            AtomSpec::new(Position::new(3, 2), AtomKindId(0)),
            AtomSpec::new(Position::new(3, 3), AtomKindId(0)),
        ]);
        assert!(!check_done(&Board::new(&level), level.molecule()));
    }

    #[test]
    fn wrong_shape_fails() {
        let level = level(vec![
            AtomSpec::new(Position::new(0, 0), AtomKindId(0)),
            AtomSpec::new(Position::new(1, 0), AtomKindId(1)),
            AtomSpec::new(Position::new(2, 0), AtomKindId(0)),
        ]);
        assert!(!check_done(&Board::new(&level), level.molecule()));
    }

    #[test]
    fn atom_count_must_match_goal() {
        let level = level(vec![
            AtomSpec::new(Position::new(0, 0), AtomKindId(0)),
            AtomSpec::new(Position::new(1, 0), AtomKindId(1)),
        ]);
        assert!(!check_done(&Board::new(&level), level.molecule()));
    }
}
