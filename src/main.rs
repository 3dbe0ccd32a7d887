//! AGC grid CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to
//! the probe, info, or copy flow, and exit with appropriate status.
//! For programmatic use, prefer the library API (`agcgrid::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
