use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use keycalc::cli::Cli;

fn main() -> Result<ExitCode> {
    keycalc::app::run(Cli::parse())
}
