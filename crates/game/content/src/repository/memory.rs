//! In-memory SaveRepository implementation for tests and scripted sessions.

use std::collections::BTreeMap;
use std::sync::RwLock;

use atomix_core::SavedGame;

use crate::repository::{RepositoryError, Result, SaveRepository, validate_slot};

/// In-memory implementation of SaveRepository.
#[derive(Default)]
pub struct InMemorySaveRepository {
    games: RwLock<BTreeMap<String, SavedGame>>,
}

impl InMemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, slot: &str, game: &SavedGame) -> Result<()> {
        validate_slot(slot)?;
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.insert(slot.to_owned(), game.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SavedGame>> {
        validate_slot(slot)?;
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.games
            .read()
            .map(|games| games.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.keys().cloned().collect())
    }
}
