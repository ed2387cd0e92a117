use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dreamspell calendar-cycle engine.
#[derive(Parser)]
#[command(
    name = "dreamspell",
    version,
    about = "Tzolkin, oracle and 13-Moon positions for Gregorian dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Built-in defaults are used if omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the pulse of a calendar day.
    Day(DayArgs),
    /// Show seal, tone, oracle and cycles of a Kin.
    Kin(KinArgs),
    /// List the Kin of consecutive days.
    Sequence(SequenceArgs),
    /// List the registered panels.
    Panels,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Date as YYYY-MM-DD (default: today).
    pub date: Option<String>,

    /// Print JSON instead of text panels.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `kin` subcommand.
#[derive(clap::Args)]
pub struct KinArgs {
    /// Kin number (1..=260).
    pub kin: u16,

    /// Print JSON instead of text panels.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `sequence` subcommand.
#[derive(clap::Args)]
pub struct SequenceArgs {
    /// First date as YYYY-MM-DD.
    #[arg(short, long)]
    pub start: String,

    /// Number of consecutive days.
    #[arg(short, long, default_value_t = 13)]
    pub days: usize,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
