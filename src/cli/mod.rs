//! CLI interface for sharpline
//!
//! Provides subcommands for:
//! - `picks`: generate picks from stored snapshots
//! - `fetch`: capture an odds window and record opening lines
//! - `watch`: fetch and evaluate on an interval
//! - `config`: show effective thresholds

mod fetch;
mod picks;
mod watch;

pub use fetch::FetchArgs;
pub use picks::PicksArgs;
pub use watch::WatchArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sharpline")]
#[command(about = "Reverse line movement detection for US sports betting markets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate picks from stored snapshots
    Picks(PicksArgs),
    /// Capture an odds window and record opening lines
    Fetch(FetchArgs),
    /// Fetch and evaluate on an interval
    Watch(WatchArgs),
    /// Show effective thresholds
    Config,
}
