//! Content factory for loading levels and configuration from a data directory.

use std::path::{Path, PathBuf};

use atomix_core::{GameConfig, Level};

use crate::loaders::{ConfigLoader, LevelLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// └── levels/
///     ├── water.ron
///     └── carbon_dioxide.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, falling back to defaults.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load_or_default(&path)
    }

    /// Load a level from `levels/{name}.ron`.
    pub fn load_level(&self, name: &str, config: &GameConfig) -> LoadResult<Level> {
        LevelLoader::load(&self.level_path(name), config)
    }

    /// Names of all levels under `levels/`, sorted.
    pub fn list_levels(&self) -> LoadResult<Vec<String>> {
        let levels_dir = self.data_dir.join("levels");
        let entries = std::fs::read_dir(&levels_dir).map_err(|e| {
            anyhow::anyhow!("Failed to list levels in {}: {}", levels_dir.display(), e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_owned());
            }
        }
        names.sort_unstable();
        Ok(names)
    }

    /// Path of the file backing level `name`.
    pub fn level_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("levels").join(format!("{}.ron", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.level_path("water"),
            Path::new("/tmp/data/levels/water.ron")
        );
    }

    #[test]
    fn lists_only_ron_levels() {
        let dir = tempfile::tempdir().unwrap();
        let levels = dir.path().join("levels");
        std::fs::create_dir(&levels).unwrap();
        for file in ["carbon_dioxide.ron", "water.ron", "notes.txt"] {
            std::fs::write(levels.join(file), "").unwrap();
        }

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.list_levels().unwrap(), vec!["carbon_dioxide", "water"]);
    }

    #[test]
    fn config_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }
}
