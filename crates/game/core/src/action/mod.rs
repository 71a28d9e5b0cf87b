//! Slide moves: directions, distance measurement and application.
//!
//! These are the primitive board transitions. Undo bookkeeping, move
//! counting and notifications are layered on top by [`crate::engine`].
mod direction;
mod slide;

pub use direction::Direction;
pub use slide::{apply_move, compute_slide};
