mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vanish", about = "Paint over an object in a photo and remove it")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the masked region of a photo via the edit service
    Erase(commands::erase::EraseArgs),
    /// Flatten a mask over a photo without calling the service
    Compose(commands::compose::ComposeArgs),
    /// Show image metadata and the size it would be submitted at
    Info(commands::info::InfoArgs),
    /// Print or save a default service config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Erase(args) => commands::erase::run(args),
        Commands::Compose(args) => commands::compose::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
