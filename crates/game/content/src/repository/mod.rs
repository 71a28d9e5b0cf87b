//! Persistence for saved games.
//!
//! Saved games are dynamic data: they change every time the player saves.
//! Static content (levels, configuration) is handled by the loaders.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use traits::SaveRepository;

/// Checks that a slot name is usable as a file stem.
pub(crate) fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidSlot(slot.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names_are_file_safe() {
        assert!(validate_slot("quick-save_1").is_ok());
        for bad in ["", "../escape", "a b", "slot.ron"] {
            assert!(matches!(
                validate_slot(bad),
                Err(RepositoryError::InvalidSlot(_))
            ));
        }
    }
}
