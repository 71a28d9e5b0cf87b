//! Level loader.
//!
//! Level files are RON [`LevelDescription`]s: a symbol table, the field
//! rows and the goal molecule rows.

use std::path::Path;

use atomix_core::{GameConfig, Level, LevelDescription};

use crate::loaders::{LoadResult, read_file};

/// Loader for levels from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load and validate a level for the configured field size.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<Level> {
        let content = read_file(path)?;
        let level = Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Invalid level {}: {}", path.display(), e))?;

        tracing::debug!(
            level = level.name(),
            atoms = level.atom_count(),
            walls = level.grid().wall_count(),
            "Loaded level from {}",
            path.display()
        );
        Ok(level)
    }

    /// Parse and validate level RON text.
    pub fn parse(content: &str, config: &GameConfig) -> LoadResult<Level> {
        let description = Self::parse_description(content)?;
        let level = Level::from_description(&description, config.field_size)?;

        if level.atom_count() != level.molecule().len() {
            tracing::warn!(
                level = level.name(),
                atoms = level.atom_count(),
                molecule = level.molecule().len(),
                "Atom count differs from molecule size; level cannot be solved"
            );
        }
        Ok(level)
    }

    /// Parse level RON text without validating it.
    pub fn parse_description(content: &str) -> LoadResult<LevelDescription> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomix_core::{AtomHandle, Element, LevelError, Position};

    const WATER: &str = r######"(
        name: "Water",
        atoms: {
            'h': (element: Hydrogen, bonds: "c"),
            'o': (element: Oxygen, bonds: "ag"),
        },
        field: [
            "#####",
            "#h..#",
            "#.o.#",
            "#..h#",
            "#####",
        ],
        molecule: [
            "",
            "  hoh",
        ],
    )"######;

    fn config() -> GameConfig {
        GameConfig::with_field_size(5)
    }

    #[test]
    fn parses_water() {
        let level = LevelLoader::parse(WATER, &config()).unwrap();

        assert_eq!(level.name(), "Water");
        assert_eq!(level.atom_count(), 3);
        assert_eq!(level.grid().wall_count(), 16);
        assert_eq!(level.initial_atoms()[1].position, Position::new(2, 2));

        let molecule = level.molecule();
        assert_eq!((molecule.width(), molecule.height()), (3, 1));
        let oxygen = molecule.kind_at(Position::new(1, 0)).unwrap();
        assert_eq!(molecule.kind(oxygen).unwrap().element, Element::Oxygen);
    }

    #[test]
    fn rejects_short_rows() {
        let broken = WATER.replace("\"#.o.#\"", "\"#.o#\"");
        let error = LevelLoader::parse(&broken, &config()).unwrap_err();
        assert_eq!(
            error.downcast_ref::<LevelError>(),
            Some(&LevelError::WrongRowWidth {
                row: 2,
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn rejects_unknown_field_symbol() {
        let broken = WATER.replace("\"#..h#\"", "\"#..x#\"");
        let error = LevelLoader::parse(&broken, &config()).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<LevelError>(),
            Some(LevelError::UnknownSymbol { symbol: 'x', row: 3, column: 3 })
        ));
    }

    #[test]
    fn wrong_field_size_is_rejected() {
        let error = LevelLoader::parse(WATER, &GameConfig::default()).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<LevelError>(),
            Some(LevelError::WrongRowCount { expected: 15, found: 5 })
        ));
    }

    #[test]
    fn count_mismatch_still_loads() {
        let extra = WATER.replace("\"#..h#\"", "\"#.hh#\"");
        let level = LevelLoader::parse(&extra, &config()).unwrap();
        assert_eq!(level.atom_count(), 4);
        assert_eq!(level.molecule().len(), 3);
        assert!(level.initial_atoms().get(AtomHandle(3).index()).is_some());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ron");
        let message = LevelLoader::load(&path, &config()).unwrap_err().to_string();
        assert!(message.contains("missing.ron"));
    }
}
