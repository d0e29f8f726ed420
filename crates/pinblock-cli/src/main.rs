//! `pinblock` — encode and decode ISO-3 PIN blocks from the command line.
//!
//! A thin shell over `pinblock-core`: parses arguments, runs one codec
//! operation, prints the result on stdout. Logs go to stderr.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use zeroize::Zeroize;

use cli::Cli;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("warning: logging unavailable: {e}");
    }

    let cli = Cli::parse();

    match commands::run(cli.cmd) {
        Ok(mut output) => {
            println!("{output}");
            output.zeroize();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
