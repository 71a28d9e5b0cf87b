//! Repository contract for saved games.

use atomix_core::SavedGame;

use crate::repository::Result;

/// Repository for saved games, indexed by slot name.
///
/// Slot names are restricted to ASCII letters, digits, `-` and `_`.
pub trait SaveRepository: Send + Sync {
    /// Save a game under `slot`, replacing any previous save.
    fn save(&self, slot: &str, game: &SavedGame) -> Result<()>;

    /// Load the game saved under `slot`.
    fn load(&self, slot: &str) -> Result<Option<SavedGame>>;

    /// Check if a save exists
    fn exists(&self, slot: &str) -> bool;

    /// Delete a save; deleting a missing slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slot names, sorted.
    fn list_slots(&self) -> Result<Vec<String>>;
}
