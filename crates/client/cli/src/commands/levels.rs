//! List levels and saved games.

use anyhow::Result;
use atomix_content::{ContentFactory, FileSaveRepository, SaveRepository};
use clap::Parser;
use console::style;

use crate::config::CliConfig;

/// List available levels and saved games
#[derive(Parser)]
pub struct Levels {
    /// Also list saved-game slots
    #[arg(short, long)]
    saves: bool,
}

impl Levels {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = ContentFactory::new(&config.data_dir);
        println!("{}", style("Levels:").bold().yellow());
        for name in factory.list_levels()? {
            println!("  {}", name);
        }

        if self.saves {
            let repo = FileSaveRepository::new(&config.save_dir)?;
            println!("{}", style("Saved games:").bold().yellow());
            for slot in repo.list_slots()? {
                println!("  {}", slot);
            }
        }
        Ok(())
    }
}
