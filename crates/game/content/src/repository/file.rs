//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use atomix_core::SavedGame;

use crate::repository::{RepositoryError, Result, SaveRepository, validate_slot};

const EXTENSION: &str = "ron";

/// File-based implementation of SaveRepository.
///
/// Each slot is stored as `{slot}.ron` inside the base directory. Writes go
/// to a temporary file first and are renamed into place, so a crash never
/// leaves a half-written save behind.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository, creating the base directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", slot, EXTENSION))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: &str, game: &SavedGame) -> Result<()> {
        validate_slot(slot)?;
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("ron.tmp");

        let text = ron::ser::to_string_pretty(game, ron::ser::PrettyConfig::default())
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, text).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            moves = game.move_count,
            "Saved game[{}] to {}",
            slot,
            path.display()
        );
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SavedGame>> {
        validate_slot(slot)?;
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let game: SavedGame = ron::from_str(&text).map_err(|e| RepositoryError::Corrupt {
            slot: slot.to_owned(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Loaded game[{}] from {}", slot, path.display());
        Ok(Some(game))
    }

    fn exists(&self, slot: &str) -> bool {
        validate_slot(slot).is_ok() && self.slot_path(slot).exists()
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let path = self.slot_path(slot);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted game[{}]", slot);
        }
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;
        for entry in entries {
            let path = entry.map_err(RepositoryError::Io)?.path();

            if path.extension().and_then(|s| s.to_str()) == Some(EXTENSION)
                && let Some(slot) = path.file_stem().and_then(|s| s.to_str())
                && validate_slot(slot).is_ok()
            {
                slots.push(slot.to_owned());
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomix_core::{Position, SavedMove};

    fn sample() -> SavedGame {
        SavedGame {
            positions: vec![Position::new(1, 1), Position::new(3, 2)],
            move_count: 1,
            moves: vec![SavedMove {
                atom: 1,
                direction: 3,
                distance: 2,
            }],
            selected: Some(1),
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path().join("saves")).unwrap();

        assert_eq!(repo.load("quick").unwrap(), None);
        repo.save("quick", &sample()).unwrap();

        assert!(repo.exists("quick"));
        assert_eq!(repo.load("quick").unwrap(), Some(sample()));
        assert!(!dir.path().join("saves/quick.ron.tmp").exists());
    }

    #[test]
    fn list_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        repo.save("b", &sample()).unwrap();
        repo.save("a", &SavedGame::default()).unwrap();
        fs::write(dir.path().join("readme.txt"), "not a save").unwrap();

        assert_eq!(repo.list_slots().unwrap(), vec!["a", "b"]);

        repo.delete("a").unwrap();
        repo.delete("a").unwrap();
        assert_eq!(repo.list_slots().unwrap(), vec!["b"]);
    }

    #[test]
    fn garbage_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        fs::write(dir.path().join("broken.ron"), "(positions: [").unwrap();

        assert!(matches!(
            repo.load("broken"),
            Err(RepositoryError::Corrupt { slot, .. }) if slot == "broken"
        ));
    }

    #[test]
    fn rejects_path_like_slots() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();

        assert!(matches!(
            repo.save("../outside", &sample()),
            Err(RepositoryError::InvalidSlot(_))
        ));
        assert!(!repo.exists("../outside"));
    }
}
