//! Static level data consumed by the engine.
//!
//! A [`Level`] bundles the wall [`Grid`], the goal [`Molecule`] and the
//! initial atom placement. It is built once per level load, validated on
//! construction and never mutated afterwards, so it can be shared by
//! reference with every engine call.
mod atom_kind;
mod error;
mod grid;
mod molecule;

use std::collections::BTreeMap;

pub use atom_kind::{AtomKind, AtomKindId, Bond, BondOrder, Element, Heading};
pub use error::LevelError;
pub use grid::Grid;
pub use molecule::{Molecule, MoleculeCell};

use crate::state::{AtomHandle, Position};

/// Cell character for a wall in level rows.
pub const WALL_SYMBOL: char = '#';
/// Cell character for an empty cell in level rows.
pub const EMPTY_SYMBOL: char = '.';

/// Initial placement of one atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomSpec {
    pub position: Position,
    pub kind: AtomKindId,
}

impl AtomSpec {
    pub fn new(position: Position, kind: AtomKindId) -> Self {
        Self { position, kind }
    }
}

/// How one atom symbol of a level description should be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomDescription {
    pub element: Element,
    /// Bond codes, see [`Bond::from_code`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonds: String,
}

/// Character-based level description as it appears in level files.
///
/// `field` holds one string per row; `'#'` is a wall, `'.'` is empty and
/// any other character must be a key of `atoms`. `molecule` uses the same
/// symbols (with `'.'` or `' '` for gaps) and may sit anywhere inside its
/// own rows; it is normalized when parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDescription {
    pub name: String,
    pub atoms: BTreeMap<char, AtomDescription>,
    pub field: Vec<String>,
    pub molecule: Vec<String>,
}

/// Immutable, validated level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    grid: Grid,
    molecule: Molecule,
    atoms: Vec<AtomSpec>,
}

impl Level {
    /// Assembles a level from parts, checking that every atom sits on a free,
    /// in-bounds cell and uses a kind known to the molecule.
    pub fn new(grid: Grid, molecule: Molecule, atoms: Vec<AtomSpec>) -> Result<Self, LevelError> {
        if atoms.is_empty() {
            return Err(LevelError::NoAtoms);
        }

        for (index, spec) in atoms.iter().enumerate() {
            let atom = AtomHandle::from_index(index);
            if !grid.contains(spec.position) {
                return Err(LevelError::AtomOutOfBounds {
                    atom,
                    position: spec.position,
                });
            }
            if grid.is_wall(spec.position) {
                return Err(LevelError::AtomOnWall {
                    atom,
                    position: spec.position,
                });
            }
            if molecule.kind(spec.kind).is_none() {
                return Err(LevelError::UnknownKind(spec.kind));
            }
            if let Some(first) = atoms[..index]
                .iter()
                .position(|other| other.position == spec.position)
            {
                return Err(LevelError::AtomsOverlap {
                    first: AtomHandle::from_index(first),
                    second: atom,
                    position: spec.position,
                });
            }
        }

        Ok(Self {
            grid,
            molecule,
            atoms,
        })
    }

    /// Parses a character description for a field of `field_size` cells.
    ///
    /// Symbols are resolved to [`AtomKindId`]s here, in symbol order; nothing
    /// downstream inspects raw characters again.
    pub fn from_description(
        description: &LevelDescription,
        field_size: u32,
    ) -> Result<Self, LevelError> {
        if description.atoms.len() > usize::from(u16::MAX) {
            return Err(LevelError::TooManyKinds(description.atoms.len()));
        }

        let mut kinds = Vec::with_capacity(description.atoms.len());
        for (&symbol, atom) in &description.atoms {
            if symbol == WALL_SYMBOL || symbol == EMPTY_SYMBOL || symbol == ' ' {
                return Err(LevelError::ReservedSymbol(symbol));
            }
            kinds.push(AtomKind::parse(symbol, atom.element, &atom.bonds)?);
        }
        let lookup = |symbol: char| {
            kinds
                .iter()
                .position(|kind| kind.symbol == symbol)
                .map(|index| AtomKindId(index as u16))
        };

        if description.field.len() != field_size as usize {
            return Err(LevelError::WrongRowCount {
                expected: field_size,
                found: description.field.len(),
            });
        }

        let mut walls = Vec::new();
        let mut atoms = Vec::new();
        for (row, line) in description.field.iter().enumerate() {
            let width = line.chars().count();
            if width != field_size as usize {
                return Err(LevelError::WrongRowWidth {
                    row,
                    expected: field_size,
                    found: width,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let position = Position::new(column as i32, row as i32);
                match symbol {
                    WALL_SYMBOL => walls.push(position),
                    EMPTY_SYMBOL => {}
                    other => {
                        let kind = lookup(other).ok_or(LevelError::UnknownSymbol {
                            symbol: other,
                            row,
                            column,
                        })?;
                        atoms.push(AtomSpec::new(position, kind));
                    }
                }
            }
        }

        let mut cells = Vec::new();
        for (row, line) in description.molecule.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                if symbol == EMPTY_SYMBOL || symbol == ' ' {
                    continue;
                }
                let kind = lookup(symbol).ok_or(LevelError::UnknownSymbol {
                    symbol,
                    row,
                    column,
                })?;
                cells.push((Position::new(column as i32, row as i32), kind));
            }
        }

        let molecule = Molecule::new(description.name.clone(), kinds, cells)?;
        Self::new(Grid::with_walls(field_size, walls), molecule, atoms)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    /// Atom placement at level start, indexed by [`AtomHandle`].
    pub fn initial_atoms(&self) -> &[AtomSpec] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn name(&self) -> &str {
        self.molecule.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> LevelDescription {
        let mut atoms = BTreeMap::new();
        atoms.insert(
            'a',
            AtomDescription {
                element: Element::Hydrogen,
                bonds: "c".into(),
            },
        );
        atoms.insert(
            'b',
            AtomDescription {
                element: Element::Oxygen,
                bonds: "cg".into(),
            },
        );
        atoms.insert(
            'c',
            AtomDescription {
                element: Element::Hydrogen,
                bonds: "g".into(),
            },
        );
        LevelDescription {
            name: "Water".into(),
            atoms,
            field: vec![
                "#####".into(),
                "#a..#".into(),
                "#.#b#".into(),
                "#c..#".into(),
                "#####".into(),
            ],
            molecule: vec!["....".into(), ".abc".into()],
        }
    }

    #[test]
    fn parses_walls_atoms_and_goal() {
        let level = Level::from_description(&water(), 5).unwrap();

        assert_eq!(level.name(), "Water");
        assert!(level.grid().is_wall(Position::new(2, 2)));
        assert!(!level.grid().is_wall(Position::new(1, 1)));
        assert_eq!(level.grid().wall_count(), 17);

        let atoms = level.initial_atoms();
        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms[0], AtomSpec::new(Position::new(1, 1), AtomKindId(0)));
        assert_eq!(atoms[1], AtomSpec::new(Position::new(3, 2), AtomKindId(1)));
        assert_eq!(atoms[2], AtomSpec::new(Position::new(1, 3), AtomKindId(2)));

        let molecule = level.molecule();
        assert_eq!(molecule.kind_at(Position::new(0, 0)), Some(AtomKindId(0)));
        assert_eq!(molecule.kind_at(Position::new(2, 0)), Some(AtomKindId(2)));
        assert_eq!(molecule.kind(AtomKindId(1)).unwrap().bonds.len(), 2);
    }

    #[test]
    fn rejects_wrong_dimensions() {
        assert_eq!(
            Level::from_description(&water(), 6).unwrap_err(),
            LevelError::WrongRowCount {
                expected: 6,
                found: 5
            }
        );

        let mut description = water();
        description.field[2] = "#.#b".into();
        assert_eq!(
            Level::from_description(&description, 5).unwrap_err(),
            LevelError::WrongRowWidth {
                row: 2,
                expected: 5,
                found: 4
            }
        );
    }

    #[test]
    fn rejects_unknown_and_reserved_symbols() {
        let mut description = water();
        description.field[3] = "#c.x#".into();
        assert_eq!(
            Level::from_description(&description, 5).unwrap_err(),
            LevelError::UnknownSymbol {
                symbol: 'x',
                row: 3,
                column: 3
            }
        );

        let mut description = water();
        description.atoms.insert(
            '#',
            AtomDescription {
                element: Element::Carbon,
                bonds: String::new(),
            },
        );
        assert_eq!(
            Level::from_description(&description, 5).unwrap_err(),
            LevelError::ReservedSymbol('#')
        );
    }

    #[test]
    fn requires_atoms_on_field() {
        let mut description = water();
        description.field = vec![
            "#####".into(),
            "#...#".into(),
            "#.#.#".into(),
            "#...#".into(),
            "#####".into(),
        ];
        assert_eq!(
            Level::from_description(&description, 5).unwrap_err(),
            LevelError::NoAtoms
        );
    }

    #[test]
    fn new_rejects_overlapping_atoms() {
        let level = Level::from_description(&water(), 5).unwrap();
        let atoms = vec![
            AtomSpec::new(Position::new(1, 1), AtomKindId(0)),
            AtomSpec::new(Position::new(1, 1), AtomKindId(1)),
        ];
        assert_eq!(
            Level::new(level.grid().clone(), level.molecule().clone(), atoms).unwrap_err(),
            LevelError::AtomsOverlap {
                first: AtomHandle(0),
                second: AtomHandle(1),
                position: Position::new(1, 1)
            }
        );
    }
}
