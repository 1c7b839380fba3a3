//! Create command implementation

use anyhow::{Context, Result};
use ppts_core::LogObserver;
use ppts_db::{load_tables, DuckDbSink};
use std::path::Path;

use crate::cli::{CreateArgs, GlobalArgs};
use crate::commands::common;

/// Execute the create command
pub(crate) fn execute(args: &CreateArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let overwrite = args.overwrite || config.overwrite;
    let destination = Path::new(&args.destination);

    if destination.exists() && !overwrite {
        anyhow::bail!(
            "Destination {} already exists (use --overwrite to replace it)",
            destination.display()
        );
    }

    let dataset = common::normalize(&args.source, &config)?;

    let mut sink = DuckDbSink::open(destination, overwrite)
        .with_context(|| format!("Failed to open {}", destination.display()))?;
    let summary = match load_tables(&mut sink, &dataset.tables(), &LogObserver) {
        Ok(summary) => summary,
        Err(e) => {
            if let Err(cleanup) = sink.discard() {
                log::warn!("Could not remove staging database: {cleanup}");
            }
            return Err(e).with_context(|| format!("Failed to load {}", destination.display()));
        }
    };
    sink.persist().with_context(|| format!("Failed to write {}", destination.display()))?;

    println!("Created {}\n", destination.display());
    common::print_summary(&summary);
    Ok(())
}
