//! Geogate CLI
//!
//! Command-line interface for the geogate location-authenticity system.
//!
//! # Usage
//!
//! ```bash
//! # Score a fix against the local history file
//! geogate check --lat 19.076 --lon 72.8777 --accuracy 8 --speed 1.2
//!
//! # Same, as a machine-readable document
//! geogate check --lat 51.5074 --lon -0.1278 --json
//!
//! # Inspect the stored history
//! geogate history
//!
//! # Display version information
//! geogate version
//! ```

use clap::{Parser, Subcommand};

pub mod commands;

/// Geogate Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "geogate")]
#[command(author, version, about = "Location-authenticity checks for attendance capture")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one position fix and record it in the history
    Check(commands::CheckArgs),

    /// Print the stored location history
    History(commands::HistoryArgs),

    /// Display version information
    Version,
}
