//! Line-oriented input for the play session.
//!
//! This module owns the text-to-command mapping so the session loop stays
//! agnostic about concrete spellings and aliases.

use atomix_core::{AtomHandle, Direction};

/// High-level command decoded from one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayCommand {
    /// Slide the selected atom.
    Move(Direction),
    /// Select the next atom (column-major).
    Next,
    /// Select the previous atom.
    Previous,
    /// Select an atom by index.
    Select(AtomHandle),
    Undo,
    Redo,
    UndoAll,
    RedoAll,
    /// Persist the game under a slot name.
    Save(String),
    /// Print the board.
    Show,
    Help,
    Quit,
    /// Blank line.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` is not an atom index")]
    BadIndex(String),
}

pub const HELP: &str = "\
commands:
  up | down | left | right   (or w s a d)  slide the selected atom
  next | prev                              move the selection cursor
  select <index>                           select an atom by index
  undo | redo | undo-all | redo-all        walk the move history
  save <slot>                              save the game
  show                                     print the board
  quit                                     leave the level";

/// Decodes one line of user input.
pub fn parse_line(line: &str) -> Result<PlayCommand, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(PlayCommand::None);
    };
    let argument = words.next();

    let command = match head.to_ascii_lowercase().as_str() {
        "up" | "w" => PlayCommand::Move(Direction::Up),
        "down" | "s" => PlayCommand::Move(Direction::Down),
        "left" | "a" => PlayCommand::Move(Direction::Left),
        "right" | "d" => PlayCommand::Move(Direction::Right),
        "next" | "n" => PlayCommand::Next,
        "prev" | "previous" | "p" => PlayCommand::Previous,
        "select" => {
            let index = argument.ok_or(InputError::MissingArgument {
                command: "select",
                expected: "an atom index",
            })?;
            let index = index
                .parse()
                .map_err(|_| InputError::BadIndex(index.to_owned()))?;
            PlayCommand::Select(AtomHandle(index))
        }
        "undo" | "u" => PlayCommand::Undo,
        "redo" | "r" => PlayCommand::Redo,
        "undo-all" => PlayCommand::UndoAll,
        "redo-all" => PlayCommand::RedoAll,
        "save" => {
            let slot = argument.ok_or(InputError::MissingArgument {
                command: "save",
                expected: "a slot name",
            })?;
            PlayCommand::Save(slot.to_owned())
        }
        "show" => PlayCommand::Show,
        "help" | "?" => PlayCommand::Help,
        "quit" | "q" | "exit" => PlayCommand::Quit,
        _ => return Err(InputError::Unknown(head.to_owned())),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_directions() {
        assert_eq!(parse_line("W"), Ok(PlayCommand::Move(Direction::Up)));
        assert_eq!(parse_line("  right "), Ok(PlayCommand::Move(Direction::Right)));
        assert_eq!(parse_line("a"), Ok(PlayCommand::Move(Direction::Left)));
    }

    #[test]
    fn arguments_are_required() {
        assert_eq!(parse_line("select 2"), Ok(PlayCommand::Select(AtomHandle(2))));
        assert_eq!(parse_line("save slot_1"), Ok(PlayCommand::Save("slot_1".into())));
        assert!(matches!(
            parse_line("select"),
            Err(InputError::MissingArgument { command: "select", .. })
        ));
        assert_eq!(
            parse_line("select -1"),
            Err(InputError::BadIndex("-1".into()))
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_line(""), Ok(PlayCommand::None));
        assert_eq!(parse_line("jump"), Err(InputError::Unknown("jump".into())));
    }
}
