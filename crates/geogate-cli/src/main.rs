//! Geogate CLI Entry Point
//!
//! This is the main entry point for the geogate command-line tool.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use geogate_cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            geogate_cli::commands::run_check(&args)?;
        }
        Commands::History(args) => {
            geogate_cli::commands::run_history(&args)?;
        }
        Commands::Version => {
            println!("geogate {}", env!("CARGO_PKG_VERSION"));
            println!("detect module version: {}", geogate_detect::VERSION);
        }
    }

    Ok(())
}
