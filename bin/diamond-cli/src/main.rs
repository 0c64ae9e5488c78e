//! CLI to derive selectors and simulate cuts of a router's selector table.

mod cli;
mod handlers;
mod params;
mod report;

use anyhow::{Error, Result};
use clap::Parser;
use diamond_common::logging::{self, LoggerConfig};

use crate::handlers::{cut, inspect, selectors};

fn main() -> Result<(), Error> {
    logging::init(LoggerConfig::with_base_name("diamond-cli"));

    let cli = cli::Cli::parse();
    let format = cli.format;
    match cli.command {
        cli::Commands::Selectors(args) => selectors::handle_selectors(args)?.print(format),
        cli::Commands::Inspect(args) => inspect::handle_inspect(args)?.print(format),
        cli::Commands::Cut(args) => cut::handle_cut(args)?.print(format),
    }
}
