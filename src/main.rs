mod chart_cmd;
mod cli;
mod config;
mod logging;
mod reading_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Chart(args) => chart_cmd::run(args),
        Command::Reading(args) => reading_cmd::run(args),
    }
}
