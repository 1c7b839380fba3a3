//! Validate command implementation
//!
//! Runs the same read, normalize, and load path as `create`, loading into
//! memory instead of a database file.

use anyhow::{Context, Result};
use ppts_core::NoopObserver;
use ppts_db::{load_tables, MemorySink};

use crate::cli::{GlobalArgs, SummaryOutput, ValidateArgs};
use crate::commands::common;

/// Execute the validate command
pub(crate) fn execute(args: &ValidateArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let dataset = common::normalize(&args.source, &config)?;

    let mut sink = MemorySink::new();
    let summary = load_tables(&mut sink, &dataset.tables(), &NoopObserver)
        .context("Normalized tables do not match their definitions")?;

    match args.output {
        SummaryOutput::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        SummaryOutput::Table => {
            println!("{} is valid\n", args.source);
            common::print_summary(&summary);
        }
    }
    Ok(())
}
