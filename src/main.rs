mod cli;
mod config;
mod convert;
mod day_cmd;
mod kin_cmd;
mod logging;
mod panels;
mod pulse;
mod sequence_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::DreamspellConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DreamspellConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Day(args) => day_cmd::run(args, &config),
        Command::Kin(args) => kin_cmd::run(args, &config),
        Command::Sequence(args) => sequence_cmd::run(args, &config),
        Command::Panels => {
            let enabled = panels::resolve(&config.output.panels)?;
            for panel in panels::REGISTRY {
                let mark = if enabled.iter().any(|p| p.name() == panel.name()) {
                    '*'
                } else {
                    ' '
                };
                println!("{mark} {:<10} {}", panel.name(), panel.description());
            }
            Ok(())
        }
    }
}
