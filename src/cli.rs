use clap::Parser;
use std::path::PathBuf;

/// Minimal single-screen to-do list for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tuido", version, about)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with the demo list instead of the configured seed.
    #[arg(long)]
    pub demo: bool,
}
