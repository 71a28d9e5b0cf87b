//! Terminal client entry point.
mod commands;
mod config;
mod input;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Levels, Play};
use config::CliConfig;

/// Slide atoms until they form the molecule
#[derive(Parser)]
#[command(name = "atomix")]
#[command(about = "Sliding atom puzzle in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory holding config.toml and levels/ (overrides ATOMIX_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory for saved games (overrides ATOMIX_SAVE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play a level, reading commands from stdin
    Play(Play),

    /// Print a level's field and goal molecule
    Inspect(Inspect),

    /// List available levels and saved games
    Levels(Levels),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ATOMIX_DATA_DIR and friends)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.data_dir, cli.save_dir);

    match cli.command {
        Command::Play(cmd) => cmd.execute(&config),
        Command::Inspect(cmd) => cmd.execute(&config),
        Command::Levels(cmd) => cmd.execute(&config),
    }
}
