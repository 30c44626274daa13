//! Cinder CLI - command-line interface for the Cinder front-end.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "CINDER_LOG";

/// Cinder - syntax tree foundation for the Cinder front-end
#[derive(Parser)]
#[command(name = "cinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version and the built-in node kinds
    Info,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let default = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Info => commands::info::run(),
    }
}
