//! ppts CLI - normalize a planning-permit extract into a relational database

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::Cli;
use commands::{create, validate};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose)?;

    match &cli.command {
        cli::Commands::Create(args) => create::execute(args, &cli.global),
        cli::Commands::Validate(args) => validate::execute(args, &cli.global),
    }
}
