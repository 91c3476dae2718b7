//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use conqueror_domain::GameMode;
use std::path::PathBuf;

/// Conqueror CLI - Predict when a player's rating will reach a rank.
#[derive(Debug, Parser)]
#[command(name = "conqueror")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONQUEROR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (target date only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict when a player reaches a target rank from their game history
    Predict(PredictArgs),

    /// Fit a trend through a raw list of observations
    Fit(FitArgs),

    /// List the rank ladder
    Ranks,
}

/// Arguments for the predict command.
#[derive(Debug, Parser)]
pub struct PredictArgs {
    /// JSON file with one games page or an array of pages
    pub history: PathBuf,

    /// Profile ID of the player
    #[arg(short, long)]
    pub player: u64,

    /// Leaderboard to read ratings from (solo, team, rm_solo or rm_team)
    #[arg(short, long, default_value = "solo")]
    pub mode: GameMode,

    /// Target rating
    #[arg(short, long, conflicts_with = "rank")]
    pub target: Option<f64>,

    /// Target rank name (e.g. "Conqueror I")
    #[arg(short, long)]
    pub rank: Option<String>,

    /// Chart width deciding which rank crossings are listed
    #[arg(short, long)]
    pub width: Option<u32>,
}

/// Arguments for the fit command.
#[derive(Debug, Parser)]
pub struct FitArgs {
    /// JSON file with an array of {"timestamp", "rating"} objects, timestamps
    /// in epoch milliseconds
    pub observations: PathBuf,

    /// Target rating
    #[arg(short, long, conflicts_with = "rank")]
    pub target: Option<f64>,

    /// Target rank name (e.g. "Conqueror I")
    #[arg(short, long)]
    pub rank: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
