use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally::config::Config;
use tally::ui::App;

/// Keypad-style terminal calculator with an expression trace display.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
struct Args {
    /// Path to a configuration file (overrides the default location).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never land on the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref());
    App::new(config).run()
}
