//! Subcommand implementations.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod inspect;
mod levels;
mod play;

pub use inspect::Inspect;
pub use levels::Levels;
pub use play::Play;
