use super::{AtomKind, AtomKindId, LevelError};
use crate::state::Position;

/// One occupied cell of the goal shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoleculeCell {
    /// Offset from the molecule's top-left corner.
    pub offset: Position,
    pub kind: AtomKindId,
}

/// Target arrangement the player has to reproduce anywhere on the field.
///
/// Cells are normalized on construction so that the smallest `x` and the
/// smallest `y` offset are both zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Molecule {
    name: String,
    kinds: Vec<AtomKind>,
    cells: Vec<MoleculeCell>,
    width: u32,
    height: u32,
}

impl Molecule {
    /// Builds a molecule from cells at arbitrary positions.
    pub fn new(
        name: impl Into<String>,
        kinds: Vec<AtomKind>,
        cells: impl IntoIterator<Item = (Position, AtomKindId)>,
    ) -> Result<Self, LevelError> {
        let raw: Vec<(Position, AtomKindId)> = cells.into_iter().collect();
        if raw.is_empty() {
            return Err(LevelError::EmptyMolecule);
        }

        let min_x = raw.iter().map(|(p, _)| p.x).min().unwrap_or(0);
        let min_y = raw.iter().map(|(p, _)| p.y).min().unwrap_or(0);
        let max_x = raw.iter().map(|(p, _)| p.x).max().unwrap_or(0);
        let max_y = raw.iter().map(|(p, _)| p.y).max().unwrap_or(0);

        let mut normalized: Vec<MoleculeCell> = Vec::with_capacity(raw.len());
        for (position, kind) in raw {
            if kind.index() >= kinds.len() {
                return Err(LevelError::UnknownKind(kind));
            }
            let offset = Position::new(position.x - min_x, position.y - min_y);
            if normalized.iter().any(|cell| cell.offset == offset) {
                return Err(LevelError::DuplicateMoleculeCell { offset });
            }
            normalized.push(MoleculeCell { offset, kind });
        }

        Ok(Self {
            name: name.into(),
            kinds,
            cells: normalized,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }

    /// Expected kind at a normalized offset, `None` if the goal leaves it empty.
    pub fn kind_at(&self, offset: Position) -> Option<AtomKindId> {
        self.cells
            .iter()
            .find(|cell| cell.offset == offset)
            .map(|cell| cell.kind)
    }

    pub fn kind(&self, id: AtomKindId) -> Option<&AtomKind> {
        self.kinds.get(id.index())
    }

    pub fn kinds(&self) -> &[AtomKind] {
        &self.kinds
    }

    pub fn cells(&self) -> &[MoleculeCell] {
        &self.cells
    }

    /// Number of atoms in the finished molecule.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
