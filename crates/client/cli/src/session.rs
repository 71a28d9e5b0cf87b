//! Interactive play loop over any line source.
//!
//! Moves are completed as soon as they start: a terminal has no animation
//! to wait for, so the session acknowledges every in-flight move itself.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use atomix_content::SaveRepository;
use atomix_core::{EngineResult, GameEngine, GameError, GameEvent, Level, PuzzleState};
use console::style;

use crate::input::{HELP, PlayCommand, parse_line};
use crate::render::{describe_event, render_state};

/// How a play session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Solved { moves: u32 },
    /// The player quit or input ran out.
    Left { moves: u32 },
}

pub struct PlaySession<'a> {
    level: &'a Level,
    saves: &'a dyn SaveRepository,
}

impl<'a> PlaySession<'a> {
    pub fn new(level: &'a Level, saves: &'a dyn SaveRepository) -> Self {
        Self { level, saves }
    }

    /// Plays until the molecule is complete, the player quits or `input`
    /// is exhausted.
    pub fn run<R: BufRead, W: Write>(
        &self,
        resume: Option<&str>,
        input: R,
        out: &mut W,
    ) -> Result<SessionOutcome> {
        let mut state = PuzzleState::new(self.level);
        let mut engine = GameEngine::new(self.level, &mut state);

        let events = match resume {
            Some(slot) => {
                let saved = self
                    .saves
                    .load(slot)?
                    .with_context(|| format!("No saved game in slot {slot}"))?;
                let events = engine
                    .load_saved(&saved)
                    .with_context(|| format!("Saved game {slot} does not fit this level"))?;
                tracing::info!(slot, moves = engine.move_count(), "Resumed saved game");
                events
            }
            None => engine.reset(),
        };

        writeln!(out, "{}", style(self.level.name()).bold().cyan())?;
        if engine.is_solved() {
            return self.finish(&engine, out);
        }
        write!(out, "{}", render_state(self.level, engine.state()))?;
        tracing::debug!(events = events.len(), "Session started");

        for line in input.lines() {
            let line = line?;
            let command = match parse_line(&line) {
                Ok(command) => command,
                Err(error) => {
                    writeln!(out, "{}", error)?;
                    continue;
                }
            };

            let result = match command {
                PlayCommand::Move(direction) => {
                    settle(&mut engine, |engine| engine.interactive_move(direction))
                }
                PlayCommand::Next => Ok(engine.select_next()),
                PlayCommand::Previous => Ok(engine.select_previous()),
                PlayCommand::Select(atom) => engine.select_atom(atom),
                PlayCommand::Undo => settle(&mut engine, |engine| engine.undo()),
                PlayCommand::Redo => settle(&mut engine, |engine| engine.redo()),
                PlayCommand::UndoAll => engine.undo_all(),
                PlayCommand::RedoAll => engine.redo_all(),
                PlayCommand::Save(slot) => {
                    self.save(&engine, &slot, out)?;
                    continue;
                }
                PlayCommand::Show => {
                    write!(out, "{}", render_state(self.level, engine.state()))?;
                    continue;
                }
                PlayCommand::Help => {
                    writeln!(out, "{}", HELP)?;
                    continue;
                }
                PlayCommand::Quit => break,
                PlayCommand::None => continue,
            };

            let events = match result {
                Ok(events) => events,
                Err(error) if !error.severity().is_internal() => {
                    tracing::debug!(code = error.error_code(), "Command rejected");
                    writeln!(out, "{}", error)?;
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            if events.is_empty() {
                writeln!(out, "nothing happens")?;
                continue;
            }
            for event in &events {
                let line = describe_event(self.level, &engine.state().board, event);
                writeln!(out, "  {}", style(line).dim())?;
            }
            if events
                .iter()
                .any(|event| matches!(event, GameEvent::GameOver { .. }))
            {
                return self.finish(&engine, out);
            }
            write!(out, "{}", render_state(self.level, engine.state()))?;
        }

        Ok(SessionOutcome::Left {
            moves: engine.move_count(),
        })
    }

    fn save<W: Write>(&self, engine: &GameEngine<'_>, slot: &str, out: &mut W) -> Result<()> {
        match self.saves.save(slot, &engine.save()) {
            Ok(()) => {
                tracing::info!(slot, moves = engine.move_count(), "Saved game");
                writeln!(out, "saved to slot {}", slot)?;
            }
            Err(error) => {
                tracing::warn!(slot, %error, "Save failed");
                writeln!(out, "save failed: {}", error)?;
            }
        }
        Ok(())
    }

    fn finish<W: Write>(&self, engine: &GameEngine<'_>, out: &mut W) -> Result<SessionOutcome> {
        let moves = engine.move_count();
        write!(out, "{}", render_state(self.level, engine.state()))?;
        writeln!(
            out,
            "{}",
            style(format!("Solved {} in {} moves!", self.level.name(), moves))
                .bold()
                .green()
        )?;
        tracing::info!(level = self.level.name(), moves, "Level solved");
        Ok(SessionOutcome::Solved { moves })
    }
}

/// Runs `op` and immediately acknowledges the move it started, if any.
fn settle<'a>(
    engine: &mut GameEngine<'a>,
    op: impl FnOnce(&mut GameEngine<'a>) -> EngineResult,
) -> EngineResult {
    let mut events = op(engine)?;
    if engine.is_moving() {
        events.extend(engine.complete_move()?);
    }
    Ok(events)
}
