//! Play a level interactively on stdin/stdout.

use anyhow::{Context, Result};
use atomix_content::{ContentFactory, FileSaveRepository};
use clap::Parser;

use crate::config::CliConfig;
use crate::session::{PlaySession, SessionOutcome};

/// Play a level
#[derive(Parser)]
pub struct Play {
    /// Level name (file stem under levels/, e.g. water)
    #[arg(value_name = "LEVEL")]
    level: String,

    /// Resume the game saved in this slot
    #[arg(short, long, value_name = "SLOT")]
    resume: Option<String>,
}

impl Play {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = ContentFactory::new(&config.data_dir);
        let game_config = factory.load_config()?;
        let level = factory.load_level(&self.level, &game_config)?;
        tracing::info!(
            level = level.name(),
            atoms = level.atom_count(),
            "Loaded level {}",
            self.level
        );

        let saves = FileSaveRepository::new(&config.save_dir).with_context(|| {
            format!("Failed to open save directory {}", config.save_dir.display())
        })?;

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        let outcome = PlaySession::new(&level, &saves).run(
            self.resume.as_deref(),
            stdin.lock(),
            &mut stdout,
        )?;

        if let SessionOutcome::Left { moves } = outcome {
            tracing::info!(moves, "Left {} unsolved", self.level);
        }
        Ok(())
    }
}
