mod cli;
mod config;
mod convert;
mod decompose_cmd;
mod logging;
mod reconstruct_cmd;
mod roundtrip_cmd;
mod signal_io;

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
        Command::Decompose(args) => decompose_cmd::run(args),
        Command::Reconstruct(args) => reconstruct_cmd::run(args),
        Command::Roundtrip(args) => roundtrip_cmd::run(args),
    }
}
