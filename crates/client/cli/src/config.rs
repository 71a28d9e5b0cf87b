//! CLI runtime configuration.
use std::env;
use std::path::PathBuf;

/// Locations the client reads content from and writes saves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub save_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::with_data_dir(PathBuf::from("data"))
    }
}

impl CliConfig {
    /// Saves default to `saves/` inside the data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            save_dir: data_dir.join("saves"),
            data_dir,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ATOMIX_DATA_DIR` - Content directory (default: `data`)
    /// - `ATOMIX_SAVE_DIR` - Saved games (default: `$ATOMIX_DATA_DIR/saves`)
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var_os("ATOMIX_DATA_DIR").map(PathBuf::from),
            env::var_os("ATOMIX_SAVE_DIR").map(PathBuf::from),
        )
    }

    fn from_vars(data_dir: Option<PathBuf>, save_dir: Option<PathBuf>) -> Self {
        let mut config = data_dir.map(Self::with_data_dir).unwrap_or_default();
        if let Some(save_dir) = save_dir {
            config.save_dir = save_dir;
        }
        config
    }

    /// Applies command line flags on top of the environment.
    pub fn with_overrides(self, data_dir: Option<PathBuf>, save_dir: Option<PathBuf>) -> Self {
        let explicit_save = save_dir.is_some() || self.save_dir != self.data_dir.join("saves");
        let mut config = match data_dir {
            Some(dir) => Self::with_data_dir(dir),
            None => self.clone(),
        };
        if let Some(dir) = save_dir {
            config.save_dir = dir;
        } else if explicit_save {
            config.save_dir = self.save_dir;
        }
        config
    }
}
