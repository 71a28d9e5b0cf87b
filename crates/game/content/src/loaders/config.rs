//! Game configuration loader.

use std::path::Path;

use atomix_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;

        tracing::debug!(
            field_size = config.field_size,
            animation_speed = %config.animation_speed,
            "Loaded config from {}",
            path.display()
        );
        Ok(config)
    }

    /// Like [`Self::load`], but a missing file yields [`GameConfig::default`].
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(GameConfig::default());
        }
        Self::load(path)
    }

    /// Parse config TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.field_size == 0 {
            anyhow::bail!("field_size must be at least 1");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomix_core::AnimationSpeed;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("animation_speed = \"fast\"\n").unwrap();
        assert_eq!(config.field_size, GameConfig::DEFAULT_FIELD_SIZE);
        assert_eq!(config.animation_speed, AnimationSpeed::Fast);
    }

    #[test]
    fn rejects_empty_field() {
        assert!(ConfigLoader::parse("field_size = 0\n").is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn load_reports_path_on_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "field_size = \"wide\"").unwrap();

        let message = ConfigLoader::load(&path).unwrap_err().to_string();
        assert!(message.contains("config.toml"));
    }
}
