//! Data-driven content and persistence for the atom puzzle.
//!
//! This crate reads static content from a data directory:
//! - Level layouts and goal molecules (RON, `levels/<name>.ron`)
//! - Game configuration (TOML, `config.toml`)
//!
//! and stores saved games through the [`repository::SaveRepository`]
//! contract. Content is validated into `atomix-core` types on load; nothing
//! here participates in the puzzle rules.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod repository;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelLoader, LoadResult};

#[cfg(feature = "loaders")]
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveRepository,
};
