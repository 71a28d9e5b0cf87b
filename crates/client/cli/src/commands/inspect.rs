//! Print a level without playing it.

use anyhow::Result;
use atomix_content::ContentFactory;
use clap::Parser;
use console::style;

use crate::config::CliConfig;
use crate::render::{render_initial, render_molecule};

/// Print a level's field and goal molecule
#[derive(Parser)]
pub struct Inspect {
    /// Level name (file stem under levels/)
    #[arg(value_name = "LEVEL")]
    level: String,
}

impl Inspect {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let factory = ContentFactory::new(&config.data_dir);
        let game_config = factory.load_config()?;
        let level = factory.load_level(&self.level, &game_config)?;

        println!("{}", style(format!("=== {} ===", level.name())).bold().green());
        println!(
            "{} {}",
            style("File:").bold().cyan(),
            factory.level_path(&self.level).display()
        );
        println!(
            "{} {}x{}, {} walls",
            style("Field:").bold().cyan(),
            level.grid().size(),
            level.grid().size(),
            level.grid().wall_count()
        );
        println!();
        print!("{}", render_initial(&level));
        println!();

        println!("{}", style("Atoms:").bold().yellow());
        for (index, spec) in level.initial_atoms().iter().enumerate() {
            if let Some(kind) = level.molecule().kind(spec.kind) {
                println!(
                    "  #{:<3} '{}' {:<10} at {}",
                    index,
                    kind.symbol,
                    kind.element.as_ref(),
                    spec.position
                );
            }
        }
        println!();

        let molecule = level.molecule();
        println!(
            "{} {}x{}, {} atoms",
            style("Molecule:").bold().yellow(),
            molecule.width(),
            molecule.height(),
            molecule.len()
        );
        print!("{}", render_molecule(molecule));

        if level.atom_count() != molecule.len() {
            println!(
                "{}",
                style("warning: atom count differs from molecule size").red()
            );
        }
        Ok(())
    }
}
